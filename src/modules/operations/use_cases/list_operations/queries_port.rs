use crate::modules::operations::core::operation::Operation;
use async_trait::async_trait;

#[async_trait]
pub trait OperationQueries {
    /// Snapshot of every recorded operation, oldest first.
    async fn list_all(&self) -> Vec<Operation>;
}
