//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Catalog loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Pricing(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                PricingErrorResponse {
                    error_type: e.kind().to_string(),
                    message: e.to_string(),
                    details: None,
                },
            ),
            AppError::Catalog(CatalogError::Invalid { errors }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                PricingErrorResponse {
                    error_type: "invalid_catalog".to_string(),
                    message: "Catalog failed validation".to_string(),
                    details: Some(serde_json::json!(errors)),
                },
            ),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, internal_error())
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error() -> PricingErrorResponse {
    PricingErrorResponse {
        error_type: "internal".to_string(),
        message: "Internal error".to_string(),
        details: None,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
