use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("unsupported content type: {0:?}")]
    UnsupportedMediaType(String),

    #[error("invalid violation report: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    BodyRead(#[from] BytesRejection),

    // Never becomes a response: the forward happens after the 200 is sent.
    #[error("log sink unavailable: {0}")]
    SinkUnavailable(#[from] reqwest::Error),
}

impl IntoResponse for RecorderError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecorderError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RecorderError::Decode(_) | RecorderError::BodyRead(_) => StatusCode::BAD_REQUEST,
            RecorderError::SinkUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
