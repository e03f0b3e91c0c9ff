use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::modules::category::domain::entities::Category;
use crate::shared::errors::AppResult;

/// Port (interface) for category persistence following Hexagonal Architecture
/// This is a domain layer interface - infrastructure provides the implementation
///
/// Methods stage changes against the backing store; durability is deferred to
/// the `UnitOfWork` commit. Implementations are expected to honor the
/// cancellation token at their own I/O boundaries.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stage a new category for insertion
    async fn insert(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;

    /// Fetch a category by id
    ///
    /// Fails with `AppError::NotFound` when no category has the given id.
    async fn get(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<Category>;

    /// Stage an update of an existing category
    async fn update(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;

    /// Stage the removal of a category
    async fn delete(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;
}
