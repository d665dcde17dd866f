//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - resume upload to the intake endpoint

pub mod upload;

pub use upload::*;
