use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::domain::validation;
use crate::shared::errors::AppResult;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Category Aggregate Root
///
/// Encapsulates all business rules and invariants for a catalog category.
/// Fields are private: the constructor, `update`, `activate` and `deactivate`
/// are the only mutation surface, so an instance can never be observed in a
/// state that violates its invariants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a fresh identifier and creation timestamp
    ///
    /// Validation runs before the instance exists: on failure the caller
    /// observes only the error, never a partially-initialized entity.
    /// An absent description is rejected; an empty one is allowed.
    pub fn new(name: String, description: Option<String>, is_active: bool) -> AppResult<Self> {
        Self::validate(&name, description.as_deref())?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: description.unwrap_or_default(),
            is_active,
            created_at: Utc::now(),
        })
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    /// Replace name and description, re-running all invariants first
    ///
    /// A `None` description keeps the current value. Nothing is assigned
    /// unless every check passes.
    pub fn update(&mut self, name: String, description: Option<String>) -> AppResult<()> {
        let description = description.unwrap_or_else(|| self.description.clone());
        Self::validate(&name, Some(&description))?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    /// Mark the category active. Always succeeds, idempotent.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Mark the category inactive. Always succeeds, idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    // Checks run in a fixed order; the first violated rule is the one surfaced
    fn validate(name: &str, description: Option<&str>) -> AppResult<()> {
        validation::not_null_or_empty(Some(name), "Name")?;
        validation::min_length(name, NAME_MIN_LENGTH, "Name")?;
        validation::max_length(name, NAME_MAX_LENGTH, "Name")?;
        let description = validation::not_null(description, "Description")?;
        validation::max_length(description, DESCRIPTION_MAX_LENGTH, "Description")?;
        Ok(())
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
