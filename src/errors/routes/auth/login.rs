use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum LoginError {
    Common(CommonError),
    // Covers both unknown email and wrong password, kept indistinguishable
    // so accounts cannot be enumerated
    InvalidCredentials,
}

impl ErrorResponse for LoginError {
    fn error_name(&self) -> &str {
        match self {
            LoginError::Common(e) => e.error_name(),
            LoginError::InvalidCredentials => "Invalid Credentials",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            LoginError::Common(e) => e.error_message(),
            LoginError::InvalidCredentials => json!("The provided credentials are invalid"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LoginError::Common(e) => e.status_code(),
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<CommonError> for LoginError {
    fn from(error: CommonError) -> Self {
        LoginError::Common(error)
    }
}

impl From<LoginError> for ApiError<LoginError> {
    fn from(error: LoginError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<LoginError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(LoginError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<LoginError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Database(error)))
    }
}

impl From<argon2::password_hash::Error> for ApiError<LoginError> {
    fn from(error: argon2::password_hash::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Hashing(error)))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError<LoginError> {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Token(error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    // Unknown email and wrong password both map to this variant, so the
    // wire response is identical for the two cases
    #[tokio::test]
    async fn invalid_credentials_answers_with_a_generic_401() {
        let response = ApiError(LoginError::InvalidCredentials).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], "Invalid Credentials");
        assert_eq!(value["message"], "The provided credentials are invalid");
    }
}
