//! UI Components for the resume optimizer.
//!
//! # Layout Components
//! - [`Navbar`] - Top navigation with the four routes
//! - [`Home`], [`About`], [`Contact`] - Static page shells
//!
//! # Wizard Components
//! - [`Optimizer`] - The optimizer page, wiring the HTTP gateway into [`Wizard`]
//! - [`Stepper`] - Progress markers
//! - [`JobsResumeInfo`] - Step 0: job links and resume drop zone

mod jobs_resume_info;
mod navbar;
mod optimizer;
mod pages;
mod stepper;

pub use jobs_resume_info::*;
pub use navbar::*;
pub use optimizer::*;
pub use pages::*;
pub use stepper::*;
