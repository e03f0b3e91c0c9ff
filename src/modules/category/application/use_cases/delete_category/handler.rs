use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::log_debug;
use crate::modules::category::domain::repository::CategoryRepository;
use crate::shared::{
    application::{unit_of_work::UnitOfWork, use_case::UseCase},
    errors::{AppError, AppResult},
};

use super::command::DeleteCategoryCommand;

/// Use case handler for deleting a category
///
/// The aggregate is fetched first so a missing id fails with `NotFound`
/// before any removal is staged.
pub struct DeleteCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl DeleteCategoryHandler {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            category_repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
    async fn execute(
        &self,
        command: DeleteCategoryCommand,
        cancellation: CancellationToken,
    ) -> AppResult<()> {
        if cancellation.is_cancelled() {
            return Err(AppError::Cancelled("delete category".to_string()));
        }

        let category = self
            .category_repository
            .get(command.id, cancellation.clone())
            .await?;

        self.category_repository
            .delete(&category, cancellation.clone())
            .await?;
        self.unit_of_work.commit(cancellation).await?;

        log_debug!("Deleted category '{}' ({})", category.name(), category.id());

        Ok(())
    }
}
