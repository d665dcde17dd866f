//! Multi-step wizard core.
//!
//! Plain Rust state with no DOM access, so all of it runs under
//! `cargo test` on the host:
//!
//! - [`state`] - bounded step-position state machine
//! - [`steps`] - stepper marker model
//! - [`job_links`] - editable job-link list
//! - [`acquisition`] - PDF drop zone / file picker state
//! - [`controller`] - navigation plus fire-and-forget upload

pub mod acquisition;
pub mod controller;
pub mod job_links;
pub mod state;
pub mod steps;

pub use acquisition::*;
pub use controller::*;
pub use job_links::*;
pub use state::*;
pub use steps::*;
