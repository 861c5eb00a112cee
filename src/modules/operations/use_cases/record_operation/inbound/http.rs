use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::modules::operations::use_cases::record_operation::command::RecordOperation;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

// Server-assigned fields (`id`, `createdAt`, `updatedAt`) are not read from the body.
// The body is decoded whatever its `Content-Type` header says.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOperationBody {
    pub left_operand: Option<i64>,
    pub right_operand: Option<i64>,
    pub operator: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let body: RecordOperationBody = serde_json::from_slice(&body).map_err(|error| {
        warn!(%error, "operation body rejected");
        ApiError::from(error)
    })?;

    let command = RecordOperation {
        operation_id: Uuid::now_v7(),
        left_operand: body.left_operand,
        right_operand: body.right_operand,
        operator: body.operator,
        recorded_at: Utc::now(),
    };

    let operation = state.record_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(operation)))
}
