use chrono::{DateTime, Utc};
use uuid::Uuid;

// Operand and operator fields are kept as decoded; `None` means the client left them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOperation {
    pub operation_id: Uuid,
    pub left_operand: Option<i64>,
    pub right_operand: Option<i64>,
    pub operator: Option<i64>,
    pub recorded_at: DateTime<Utc>,
}
