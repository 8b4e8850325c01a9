use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ai_client::ProviderError;
use crate::resilience::{translate, Classify, ErrorClass};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No Gemini API key available for this request")]
    MissingApiKey,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// HTTP status for a provider failure that survived the retry loop.
fn provider_status(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::ServiceBusy => StatusCode::SERVICE_UNAVAILABLE,
        ErrorClass::QuotaOrCredential => StatusCode::TOO_MANY_REQUESTS,
        ErrorClass::Permanent => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, title, message) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Not Found".to_string(),
                msg.clone(),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid Input".to_string(),
                msg.clone(),
            ),
            AppError::MissingApiKey => (
                StatusCode::BAD_REQUEST,
                "MISSING_API_KEY",
                "API Key Required".to_string(),
                "Please add your Gemini API key in your profile to use this feature.".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An Error Occurred".to_string(),
                    "A database error occurred".to_string(),
                )
            }
            AppError::Provider(e) => {
                // Raw provider text goes to the log only; the client gets the
                // translated title/description.
                tracing::error!("Provider error: {e}");
                let user_message = translate(e);
                (
                    provider_status(e.class()),
                    "PROVIDER_ERROR",
                    user_message.title,
                    user_message.description,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An Error Occurred".to_string(),
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "title": title,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
