pub mod common;
pub mod use_cases;

// Re-export commonly used types
pub use common::CategoryOutput;
pub use use_cases::{
    CreateCategoryCommand, CreateCategoryHandler, DeleteCategoryCommand, DeleteCategoryHandler,
    GetCategoryHandler, GetCategoryQuery, UpdateCategoryCommand, UpdateCategoryHandler,
};
