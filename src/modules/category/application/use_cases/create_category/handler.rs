use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::log_debug;
use crate::modules::category::application::common::CategoryOutput;
use crate::modules::category::domain::{entities::Category, repository::CategoryRepository};
use crate::shared::{
    application::{unit_of_work::UnitOfWork, use_case::UseCase},
    errors::{AppError, AppResult},
};

use super::command::CreateCategoryCommand;

/// Use case handler for creating a new category
pub struct CreateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateCategoryHandler {
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
impl UseCase<CreateCategoryCommand, CategoryOutput> for CreateCategoryHandler {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
        cancellation: CancellationToken,
    ) -> AppResult<CategoryOutput> {
        if cancellation.is_cancelled() {
            return Err(AppError::Cancelled("create category".to_string()));
        }

        // Construction enforces every invariant; no persistence call is
        // reached when it fails
        let category = Category::new(command.name, command.description, command.is_active)?;

        self.category_repository
            .insert(&category, cancellation.clone())
            .await?;
        self.unit_of_work.commit(cancellation).await?;

        log_debug!("Created category '{}' ({})", category.name(), category.id());

        Ok(CategoryOutput::from_category(&category))
    }
}
