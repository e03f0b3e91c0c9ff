mod command;
mod handler;

pub use command::UpdateCategoryCommand;
pub use handler::UpdateCategoryHandler;
