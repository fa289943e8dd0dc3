pub mod common;
pub mod response;
pub mod routes;

pub use common::CommonError;
pub use response::ErrorResponse;
pub use routes::*;
