//! # Resumeopt - resume intake service
//!
//! Receives resumes uploaded by the optimizer wizard and queues them for
//! processing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Wizard    │────▶│ Token check │────▶│   Intake    │────▶│ Submission  │
//! │ (multipart) │     │  (/auth)    │     │ (PDF check) │     │   store     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                                    │
//!                                                          SSE  ◀────┘ events
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resumeopt::{server::start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     start_server(config).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Environment configuration
//! - [`tokens`] - Access token registry
//! - [`intake`] - Upload validation
//! - [`store`] - In-memory submission store
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// State
pub mod tokens;
pub mod store;

// Validation
pub mod intake;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError,
    IntakeError,
    ServerError,
    ConfigResult,
    IntakeResult,
    ServerResult,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::ServerConfig;

// =============================================================================
// Re-exports - State
// =============================================================================

pub use tokens::TokenRegistry;
pub use store::{Submission, SubmissionStatus, SubmissionStore, RESUME_TASK};

// =============================================================================
// Re-exports - Intake
// =============================================================================

pub use intake::{load_file, validate_pdf, ResumeUpload, PDF_SIGNATURE, RESUME_FIELD};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{
    AuthResponse,
    QueuedResponse,
    SubmissionView,
    TokenQuery,
    error_response,
};

pub use api::events::{IntakeEvent, EventLevel, EVENT_BROADCASTER};

// Server
pub mod server {
    pub use crate::api::server::{router, serve, start_server, AppState, SharedState};
}
