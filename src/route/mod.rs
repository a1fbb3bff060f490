pub mod assets;
pub mod common;

// Re-export commonly used route types for convenience
pub use common::{success_return, ApiResponse, RouteResult};
