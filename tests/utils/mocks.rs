/// Mock ports for use-case tests
///
/// Handlers only see `Arc<dyn CategoryRepository>` / `Arc<dyn UnitOfWork>`,
/// so expectations on these doubles pin down the exact persistence protocol
/// of each use case.
use async_trait::async_trait;
use mockall::mock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use tana::modules::category::domain::{entities::Category, repository::CategoryRepository};
use tana::shared::{application::unit_of_work::UnitOfWork, errors::AppResult};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn insert(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;
        async fn get(&self, id: Uuid, cancellation: CancellationToken) -> AppResult<Category>;
        async fn update(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;
        async fn delete(&self, category: &Category, cancellation: CancellationToken) -> AppResult<()>;
    }
}

mock! {
    pub Uow {}

    #[async_trait]
    impl UnitOfWork for Uow {
        async fn commit(&self, cancellation: CancellationToken) -> AppResult<()>;
    }
}
