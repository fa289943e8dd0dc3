use axum::{Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{payment::PaymentCompleteError, response::ApiError},
    services::{database::DatabaseLayer, email::EmailLayer},
};

// The one product the site sells, priced in KRW
pub const PRODUCT_NAME: &str = "Graduate Admissions Complete Guide";
pub const PRODUCT_AMOUNT: u32 = 29900;

// The body also carries a client-reported paymentData blob, it is ignored
// entirely and never persisted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    user_email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

// The payment is client-reported only, the order is recorded as completed
// without any provider-side verification or input checks
#[axum::debug_handler]
pub async fn payment_complete(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PaymentCompleteError>> {
    // 1. Record completed order in database
    let order_id = database_layer
        .query()
        .order
        .create(
            payload.user_email.clone(),
            String::from(PRODUCT_NAME),
            PRODUCT_AMOUNT,
            String::from("completed"),
        )
        .await?;
    println!("1. Order recorded successfully!");

    // 2. Send download email
    // The order is already recorded, a failed send must not fail the request
    if let Err(e) = email_layer
        .send_order_confirmation(payload.user_email.clone(), order_id)
        .await
    {
        println!("2. Order confirmation email failed: {:?}", e);
    } else {
        println!("2. Order confirmation email sent successfully!");
    }

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Payment completed successfully!"),
        }),
    ))
}
