use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::types::ErrorResponse;
use crate::clients::purch::ProviderError;
use crate::services::SuggestionError;

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),

    /// Distinct from other upstream failures so the caller learns the
    /// profile may be too large to analyze.
    UpstreamTimeout(String),

    UpstreamError(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {msg}"),
            Self::UpstreamError(msg) => write!(f, "Upstream error: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::UpstreamTimeout(msg) => {
                tracing::warn!("Upstream timeout: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            Self::UpstreamError(msg) => {
                tracing::warn!("Upstream failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate gift suggestions".to_string(),
                )
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate gift suggestions".to_string(),
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse::new(error_message);
        (status, Json(body)).into_response()
    }
}

impl From<SuggestionError> for ApiError {
    fn from(err: SuggestionError) -> Self {
        match err {
            SuggestionError::Provider(provider) => match provider {
                timeout @ ProviderError::Timeout(_) => Self::UpstreamTimeout(timeout.to_string()),
                other => Self::UpstreamError(other.to_string()),
            },
            SuggestionError::AnalysisFailed => Self::UpstreamError(err.to_string()),
            SuggestionError::Store(e) => Self::DatabaseError(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_distinct_message() {
        let err: ApiError = SuggestionError::Provider(ProviderError::Timeout(240)).into();
        match err {
            ApiError::UpstreamTimeout(msg) => {
                assert!(msg.contains("too much content to analyze"));
            }
            other => panic!("expected UpstreamTimeout, got {other:?}"),
        }
    }

    #[test]
    fn test_upstream_status_maps_to_generic_error() {
        let err: ApiError = SuggestionError::Provider(ProviderError::Upstream {
            status: 500,
            reason: "Internal Server Error".to_string(),
        })
        .into();
        assert!(matches!(err, ApiError::UpstreamError(_)));
    }

    #[test]
    fn test_store_failure_maps_to_database_error() {
        let err: ApiError = SuggestionError::Store(anyhow::anyhow!("disk full")).into();
        assert!(matches!(err, ApiError::DatabaseError(_)));
    }
}
