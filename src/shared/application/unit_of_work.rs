use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::shared::errors::AppResult;

/// Port for the transactional commit boundary following Hexagonal Architecture
/// This is an application layer interface - infrastructure provides the implementation
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Make all repository changes staged since the last commit durable
    ///
    /// Failures here are infrastructure errors (`AppError::DatabaseError`),
    /// never domain errors.
    async fn commit(&self, cancellation: CancellationToken) -> AppResult<()>;
}
