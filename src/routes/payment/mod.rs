pub mod complete;

use axum::{routing::post, Router};
pub use complete::payment_complete;

use crate::setup::AppState;

pub fn payment_router() -> Router<AppState> {
    Router::new().route("/complete", post(payment_complete))
}
