//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the intake service.

pub mod server;
pub mod types;
pub mod events;

pub use server::{router, serve, start_server, AppState, SharedState};
pub use types::*;
pub use events::*;
