// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod domain; // Shared domain concepts (validation primitives)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)
