use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use pairdiff_protocol::ErrorPayload;
use pairdiff_sdk::SdkError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Target(#[from] pairdiff_types::TargetError),

    #[error(transparent)]
    Fetch(#[from] pairdiff_fetch::FetchError),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Target(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Target(e) => Self::Target(e),
            SdkError::Fetch(e) => Self::Fetch(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorPayload::new(self.to_string()))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
