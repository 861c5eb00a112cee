use crate::modules::operations::adapters::outbound::operation_store::OperationStore;
use crate::modules::operations::core::operation::Operation;
use crate::modules::operations::use_cases::record_operation::command::RecordOperation;
use crate::modules::operations::use_cases::record_operation::decide::decide_record;
use crate::modules::operations::use_cases::record_operation::decision::{DecideError, Decision};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordOperationHandler<TStore>
where
    TStore: OperationStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RecordOperationHandler<TStore>
where
    TStore: OperationStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RecordOperation) -> Result<Operation, DecideError> {
        match decide_record(command) {
            Decision::Accepted { operation } => {
                self.store.append(operation.clone()).await;
                info!(
                    operation_id = %operation.id,
                    left_operand = operation.left_operand,
                    right_operand = operation.right_operand,
                    operator = ?operation.operator,
                    "operation recorded"
                );
                Ok(operation)
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "operation rejected");
                Err(reason)
            }
        }
    }
}
