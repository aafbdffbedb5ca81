//! API error handling
//!
//! Every failure carries an [`ErrorKind`]; the kind alone picks the HTTP
//! status and the `error` field of the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::{CoreError, ErrorKind};
use domain_account::AccountError;
use domain_billing::BillingError;
use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Received unknown function invocation: {0}")]
    UnknownFunction(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::UnknownFunction(_) => ErrorKind::UnknownFunction,
            ApiError::Core(err) => err.kind(),
            ApiError::Account(err) => err.kind(),
            ApiError::Billing(err) => err.kind(),
            ApiError::Claim(err) => err.kind(),
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.kind())
    }
}

impl From<core_kernel::PortError> for ApiError {
    fn from(err: core_kernel::PortError) -> Self {
        ApiError::Core(err.into())
    }
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgumentCount
        | ErrorKind::InvalidArgumentValue
        | ErrorKind::UnknownFunction => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists
        | ErrorKind::AlreadyPurchased
        | ErrorKind::AlreadyClaimed
        | ErrorKind::ConcurrentModification => StatusCode::CONFLICT,
        ErrorKind::PolicyNotOwned => StatusCode::FORBIDDEN,
        ErrorKind::InsufficientFunds => StatusCode::PAYMENT_REQUIRED,
        ErrorKind::DecodeError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::StoreFailure => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);
        let message = self.to_string();

        if status.is_server_error() {
            error!(kind = %kind, status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(kind = %kind, status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            error: kind.as_str().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::InvalidArgumentCount), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::AlreadyClaimed), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::PolicyNotOwned), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::InsufficientFunds), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(status_for(ErrorKind::DecodeError), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(ErrorKind::StoreFailure), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_conflict_is_conflict() {
        let err: ApiError = PortError::conflict("acct:alice", Some(1), Some(2)).into();
        assert_eq!(err.kind(), ErrorKind::ConcurrentModification);
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_function_message() {
        let err = ApiError::UnknownFunction("transfer".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("transfer"));
    }
}
