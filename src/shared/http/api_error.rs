use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::modules::operations::use_cases::record_operation::decision::DecideError;
use crate::shared::http::status_response::StatusResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<DecideError> for ApiError {
    fn from(reason: DecideError) -> Self {
        Self::BadRequest(reason.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        StatusResponse::new(self.status(), self.to_string()).into_response()
    }
}
