use uuid::Uuid;

/// Command for deleting a category
#[derive(Debug, Clone)]
pub struct DeleteCategoryCommand {
    pub id: Uuid,
}

impl DeleteCategoryCommand {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
