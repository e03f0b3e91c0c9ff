use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::category::domain::entities::Category;

/// Read-only projection of a category returned by use cases
///
/// Mirrors the aggregate's current state without exposing the aggregate
/// itself, so callers cannot mutate it outside the use-case boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CategoryOutput {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}
