mod database;
mod email_service;
mod router;

pub use database::setup_database;
pub use email_service::setup_email_service;
pub use router::{setup_api_router, AppState};
