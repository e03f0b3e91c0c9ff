pub mod category_output;

pub use category_output::CategoryOutput;
