use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::DispatchError;

/// Errors returned from handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Too many powerplants: {count} (limit {limit})")]
    TooManyPlants { count: usize, limit: usize },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Error body returned to clients
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Dispatch(_) | ApiError::TooManyPlants { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Dispatch(e) => e.kind(),
            ApiError::TooManyPlants { .. } => "TooManyPlants",
            ApiError::InternalError(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        let message = match &self {
            ApiError::InternalError(_) => {
                tracing::error!(error = %self, "API error occurred");
                "An internal error occurred".to_string()
            }
            _ => {
                tracing::debug!(error = %self, "Client error");
                self.to_string()
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ApiError::InternalError(error.to_string())
    }
}
