use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::log_debug;
use crate::modules::category::application::common::CategoryOutput;
use crate::modules::category::domain::repository::CategoryRepository;
use crate::shared::{
    application::{unit_of_work::UnitOfWork, use_case::UseCase},
    errors::{AppError, AppResult},
};

use super::command::UpdateCategoryCommand;

/// Use case handler for updating a category's fields and activation flag
pub struct UpdateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateCategoryHandler {
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
impl UseCase<UpdateCategoryCommand, CategoryOutput> for UpdateCategoryHandler {
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
        cancellation: CancellationToken,
    ) -> AppResult<CategoryOutput> {
        if cancellation.is_cancelled() {
            return Err(AppError::Cancelled("update category".to_string()));
        }

        let mut category = self
            .category_repository
            .get(command.id, cancellation.clone())
            .await?;

        category.update(command.name, command.description)?;

        // Activation toggling runs after the field update and never
        // participates in the name/description invariants
        if let Some(is_active) = command.is_active {
            if is_active != category.is_active() {
                if is_active {
                    category.activate();
                } else {
                    category.deactivate();
                }
            }
        }

        self.category_repository
            .update(&category, cancellation.clone())
            .await?;
        self.unit_of_work.commit(cancellation).await?;

        log_debug!("Updated category '{}' ({})", category.name(), category.id());

        Ok(CategoryOutput::from_category(&category))
    }
}
