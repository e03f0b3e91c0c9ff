/// Command for creating a new category
///
/// An absent description is rejected by the aggregate; pass an empty string
/// for a category without one.
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: String, description: Option<String>, is_active: bool) -> Self {
        Self {
            name,
            description,
            is_active,
        }
    }
}
