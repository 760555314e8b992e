//! Scholar Server Library
//!
//! HTTP backend storing students, academics and research opportunities, with
//! a fuzzy endpoint matching student interests to opportunity descriptions.
//!
//! This library exposes the router and its parts for the binary and for tests.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
