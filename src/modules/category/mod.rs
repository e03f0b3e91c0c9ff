/// Category bounded context
///
/// Manages the category aggregate of the media catalog:
/// - Domain: entity with lifecycle invariants and the repository trait
/// - Application: CRUD use cases orchestrating domain + persistence ports
///
/// Persistence and transport are external - infrastructure implements the
/// `CategoryRepository` and `UnitOfWork` ports.
pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::common::CategoryOutput;
pub use application::use_cases::{
    CreateCategoryCommand, CreateCategoryHandler, DeleteCategoryCommand, DeleteCategoryHandler,
    GetCategoryHandler, GetCategoryQuery, UpdateCategoryCommand, UpdateCategoryHandler,
};
pub use domain::{Category, CategoryRepository};
