pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryHandler};
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category::{GetCategoryHandler, GetCategoryQuery};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryHandler};
