use axum::{extract::State, Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{auth::LoginError, response::ApiError},
    services::database::DatabaseLayer,
    setup::AppState,
    utils::{crypto::verify_password_hash, token::generate_auth_token},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email)]
    email: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserOutput {
    name: String,
    email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    token: String,
    user: UserOutput,
}

#[axum::debug_handler]
pub async fn login(
    State(app_state): State<AppState>,
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<LoginError>> {
    // 1. Validate payload input
    payload.validate()?;
    println!("1. Validation passed successfully!");

    // 2. Retrieve user from database
    // Unknown email and wrong password both answer with InvalidCredentials
    let user = match database_layer
        .query()
        .user
        .get_by_email(payload.email.clone())
        .await?
    {
        Some(user) => user,
        None => return Err(ApiError(LoginError::InvalidCredentials)),
    };
    println!("2. User existence check completed successfully!");

    // 3. Verify password
    let password_matches =
        verify_password_hash(payload.password.clone(), user.password_hash.clone()).await?;

    if !password_matches {
        return Err(ApiError(LoginError::InvalidCredentials));
    }
    println!("3. Password confirmed successfully!");

    // 4. Issue auth token
    let token = generate_auth_token(
        user.id.id.to_string(),
        user.email.clone(),
        app_state.jwt_secret.as_bytes(),
    )?;
    println!("4. Auth token issued successfully!");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            token,
            user: UserOutput {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}
