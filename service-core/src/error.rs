use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Store error: {0}")]
    StoreError(anyhow::Error),

    #[error("Service Unavailable")]
    ServiceUnavailable,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StoreError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StoreError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let status = self.status_code();

        // Server-side failures are logged here and reported opaquely.
        let detail = match self {
            AppError::InvalidInput(msg) | AppError::UnprocessableEntity(msg) => msg,
            AppError::ServiceUnavailable => "Service unavailable".to_string(),
            AppError::StoreError(err) => {
                tracing::error!(error = %err, "Store operation failed");
                "Internal server error".to_string()
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                "Internal server error".to_string()
            }
            AppError::InternalError(err) => {
                tracing::error!(error = ?err, "Internal error");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
