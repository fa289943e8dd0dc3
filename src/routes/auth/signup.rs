use axum::{Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{auth::SignupError, response::ApiError},
    services::database::DatabaseLayer,
    utils::crypto::hash_password,
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    name: String,
    #[validate(email)]
    email: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn signup(
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SignupError>> {
    // 1. Validate payload input
    payload.validate()?;
    println!("1. Validation passed successfully!");

    // 2. Check email availability
    let email_taken = database_layer
        .query()
        .user
        .check_if_exists(payload.email.clone())
        .await?;

    if email_taken {
        return Err(ApiError(SignupError::EmailAlreadyExists));
    }
    println!("2. Email availability check completed successfully!");

    // 3. Hash password
    let password_hash = hash_password(payload.password.clone()).await?;
    println!("3. Password hashed successfully!");

    // 4. Create user in database
    database_layer
        .query()
        .user
        .create(payload.name.clone(), payload.email.clone(), password_hash)
        .await?;
    println!("4. User created successfully!");

    Ok((
        StatusCode::CREATED,
        Json(RouteOutput {
            message: String::from("Signup completed successfully!"),
        }),
    ))
}
