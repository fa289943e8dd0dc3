pub mod login;
pub mod signup;

use axum::{routing::post, Router};
pub use login::login;
pub use signup::signup;

use crate::setup::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
