use derive_more::Display;
use hyper::StatusCode;
use serde_json::Value;

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum PaymentCompleteError {
    Common(CommonError),
}

impl ErrorResponse for PaymentCompleteError {
    fn error_name(&self) -> &str {
        match self {
            PaymentCompleteError::Common(e) => e.error_name(),
        }
    }

    fn error_message(&self) -> Value {
        match self {
            PaymentCompleteError::Common(e) => e.error_message(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PaymentCompleteError::Common(e) => e.status_code(),
        }
    }
}

impl From<CommonError> for PaymentCompleteError {
    fn from(error: CommonError) -> Self {
        PaymentCompleteError::Common(error)
    }
}

impl From<PaymentCompleteError> for ApiError<PaymentCompleteError> {
    fn from(error: PaymentCompleteError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<surrealdb::Error> for ApiError<PaymentCompleteError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(PaymentCompleteError::Common(CommonError::Database(error)))
    }
}
