pub mod auth;
pub mod payment;

use axum::Router;

use crate::setup::AppState;

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::auth_router())
        .nest("/payment", payment::payment_router())
}

// Main router that serves as the entry point for all routes
pub fn main_router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}
