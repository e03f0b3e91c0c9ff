use crate::shared::errors::AppResult;
/// Base trait for all use cases following CQRS pattern
///
/// This trait provides a standard interface for command/query handlers
/// following the Single Responsibility Principle. Every execution carries a
/// cancellation token that handlers check on entry and forward into each
/// repository and unit-of-work call.
///
/// # Example
///
/// ```rust,ignore
/// struct CreateCategoryCommand {
///     name: String,
///     description: Option<String>,
/// }
///
/// struct CreateCategoryHandler {
///     repository: Arc<dyn CategoryRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<CreateCategoryCommand, CategoryOutput> for CreateCategoryHandler {
///     async fn execute(
///         &self,
///         command: CreateCategoryCommand,
///         cancellation: CancellationToken,
///     ) -> AppResult<CategoryOutput> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(
        &self,
        command: TCommand,
        cancellation: CancellationToken,
    ) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery, cancellation: CancellationToken) -> AppResult<TResult>;
}
