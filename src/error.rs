//! Error taxonomy and the wire envelopes it renders to.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record matches the requested game id.
    #[error("No scorecard with gameId of {0}")]
    NotFound(String),
    /// The submitted payload is missing required fields.
    #[error("{0}")]
    InvalidInput(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid payload submitted by the client.
    #[error("{0}")]
    BadRequest(String),
    /// Requested record does not exist. Deliberately answered with status
    /// 400 rather than 404, matching the service's original wire contract.
    #[error("{0}")]
    NotFound(String),
    /// Unexpected fault while handling the request.
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => AppError::NotFound(err.to_string()),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
        }
    }
}

/// Lighter envelope used for expected, validated failures.
#[derive(Serialize)]
struct ClientErrorBody {
    msg: String,
}

/// Generic envelope used for unexpected server faults.
#[derive(Serialize)]
struct ServerErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                (StatusCode::BAD_REQUEST, Json(ClientErrorBody { msg })).into_response()
            }
            AppError::Internal(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
        }
    }
}
