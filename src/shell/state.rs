use crate::modules::operations::adapters::outbound::operation_store_in_memory::InMemoryOperationStore;
use crate::modules::operations::core::operation::Operator;
use crate::modules::operations::use_cases::list_operations::queries_port::OperationQueries;
use crate::modules::operations::use_cases::record_operation::command::RecordOperation;
use crate::modules::operations::use_cases::record_operation::decision::DecideError;
use crate::modules::operations::use_cases::record_operation::handler::RecordOperationHandler;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn OperationQueries + Send + Sync>,
    pub record_handler: Arc<RecordOperationHandler<InMemoryOperationStore>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryOperationStore::new());
        Self {
            queries: store.clone(),
            record_handler: Arc::new(RecordOperationHandler::new(store)),
        }
    }

    /// Fresh state holding the single seed record `22 + 2`.
    pub async fn seeded(now: DateTime<Utc>) -> Result<Self, DecideError> {
        let state = Self::in_memory();
        state
            .record_handler
            .handle(RecordOperation {
                operation_id: Uuid::now_v7(),
                left_operand: Some(22),
                right_operand: Some(2),
                operator: Some(i64::from(u8::from(Operator::Add))),
                recorded_at: now,
            })
            .await?;
        Ok(state)
    }
}
