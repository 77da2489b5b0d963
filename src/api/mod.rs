//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod listing;
pub mod pages;
pub mod parsing;
pub mod submissions;

// Re-export the main handler for convenience
pub use handler::handler;
