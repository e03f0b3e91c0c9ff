pub mod modules;
pub mod shared;

// Re-exports for easy external access
pub use modules::category::{Category, CategoryOutput, CategoryRepository};
pub use shared::application::{Query, UnitOfWork, UseCase};
pub use shared::errors::{AppError, AppResult};
