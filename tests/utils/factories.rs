/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use tana::modules::category::domain::entities::Category;

pub struct CategoryFactory {
    name: String,
    description: String,
    is_active: bool,
}

impl Default for CategoryFactory {
    fn default() -> Self {
        Self {
            name: format!("Category {}", rand::random::<u16>()),
            description: "A category for tests".to_string(),
            is_active: true,
        }
    }
}

impl CategoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> Category {
        Category::new(self.name, Some(self.description), self.is_active)
            .expect("factory defaults satisfy the category invariants")
    }
}
