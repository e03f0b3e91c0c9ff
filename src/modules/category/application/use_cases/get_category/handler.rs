use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::category::application::common::CategoryOutput;
use crate::modules::category::domain::repository::CategoryRepository;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetCategoryQuery;

/// Query handler for fetching a category
///
/// Read-only: no unit of work is involved and nothing is committed.
pub struct GetCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<GetCategoryQuery, CategoryOutput> for GetCategoryHandler {
    async fn execute(
        &self,
        query: GetCategoryQuery,
        cancellation: CancellationToken,
    ) -> AppResult<CategoryOutput> {
        if cancellation.is_cancelled() {
            return Err(AppError::Cancelled("get category".to_string()));
        }
        if query.id.is_nil() {
            return Err(AppError::InvalidInput("Id should not be empty".to_string()));
        }

        let category = self.category_repository.get(query.id, cancellation).await?;

        Ok(CategoryOutput::from_category(&category))
    }
}
