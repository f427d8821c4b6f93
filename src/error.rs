use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    Missing(&'static str),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Failure talking to the generative model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request timed out")]
    Timeout,

    #[error("failed to send model request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("model request failed ({status})")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode model response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("model response did not contain any text")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{message}")]
    BadBody { status: StatusCode, message: String },

    #[error(transparent)]
    Upstream(#[from] ModelError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadBody { status, .. } => *status,
            Self::Upstream(ModelError::Status { status, body }) => {
                tracing::warn!(%status, upstream_body = %body, "model call rejected");
                StatusCode::BAD_GATEWAY
            }
            Self::Upstream(err) => {
                tracing::warn!(error = %err, "model call failed");
                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
