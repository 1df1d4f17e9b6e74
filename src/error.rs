//! Per-request error taxonomy and its HTTP mapping.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::generation::GenerationError;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Missing text or type")]
    MissingField,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid text type: {0}")]
    TemplateNotFound(String),

    #[error("The translation service did not respond within {0:?}. Please try again.")]
    Timeout(Duration),

    #[error("Translation failed: the model returned no text")]
    EmptyResult,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::InvalidBody(_) | Self::TemplateNotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Timeout(_) | Self::EmptyResult | Self::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!("Rejected translate request: {}", self);
        } else {
            error!("Translate request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: TranslateError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors_are_400() {
        let (status, body) = body_of(TranslateError::MissingField).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing text or type"}));

        let (status, body) = body_of(TranslateError::TemplateNotFound("poem".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid text type: poem"}));
    }

    #[tokio::test]
    async fn test_timeout_is_500_and_mentions_retry() {
        let (status, body) = body_of(TranslateError::Timeout(Duration::from_secs(30))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("30s"));
        assert!(message.contains("try again"));
    }

    #[tokio::test]
    async fn test_provider_message_passes_through() {
        let err = TranslateError::from(GenerationError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("API key not valid"));
    }
}
