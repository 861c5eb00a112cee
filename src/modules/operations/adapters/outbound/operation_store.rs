use crate::modules::operations::core::operation::Operation;
use async_trait::async_trait;

#[async_trait]
pub trait OperationStore: Send + Sync {
    async fn append(&self, operation: Operation);
}
