use axum::http::StatusCode;

use crate::shared::http::status_response::StatusResponse;

pub async fn handle() -> StatusResponse {
    StatusResponse::new(StatusCode::OK, "OK")
}
