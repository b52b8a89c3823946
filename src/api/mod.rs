//! HTTP API: the Lambda handler and its two routes.

pub mod handler;
pub mod helpers;
pub mod mail;
pub mod parsing;
pub mod state;
pub mod summarize;

// Re-export the main handler for convenience
pub use handler::handler;
pub use state::AppState;
