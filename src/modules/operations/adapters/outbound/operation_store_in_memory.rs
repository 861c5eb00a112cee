// In memory operation history.
//
// Purpose
// - Hold every recorded operation for the lifetime of the process.
//
// Responsibilities
// - Append under a write lock so concurrent requests never interleave a push.
// - Hand out owned snapshots in insertion order.

use crate::modules::operations::adapters::outbound::operation_store::OperationStore;
use crate::modules::operations::core::operation::Operation;
use crate::modules::operations::use_cases::list_operations::queries_port::OperationQueries;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryOperationStore {
    operations: RwLock<Vec<Operation>>,
}

impl InMemoryOperationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryOperationStore {
    pub async fn len(&self) -> usize {
        self.operations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.operations.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl OperationStore for InMemoryOperationStore {
    async fn append(&self, operation: Operation) {
        self.operations.write().await.push(operation);
    }
}

#[async_trait::async_trait]
impl OperationQueries for InMemoryOperationStore {
    async fn list_all(&self) -> Vec<Operation> {
        self.operations.read().await.clone()
    }
}
