use uuid::Uuid;

/// Query for fetching a single category by id
#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub id: Uuid,
}

impl GetCategoryQuery {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
