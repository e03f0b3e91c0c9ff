mod command;
mod handler;

pub use command::CreateCategoryCommand;
pub use handler::CreateCategoryHandler;
