use uuid::Uuid;

/// Command for updating an existing category
///
/// `description` and `is_active` are optional: when absent, the stored
/// values are kept as-is.
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: Uuid,
        name: String,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
        }
    }
}
