//! Resume Optimizer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that walks the user through a three-step
//! wizard: resume and job links, template selection, download.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (Home / Optimizer / About Us / Contact)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /           Home                                        │
//! │  ├── /optimizer  Optimizer ──▶ Wizard                        │
//! │  │               ├── Stepper                                 │
//! │  │               ├── JobsResumeInfo (step 0)                 │
//! │  │               └── Back / Next ──▶ WizardController        │
//! │  │                                   └──▶ UploadGateway      │
//! │  ├── /about      About                                       │
//! │  └── /contact    Contact                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, token and wizard constants
//! - [`types`] - Upload outcome, notices, errors
//! - [`wizard`] - DOM-free wizard core (state machine, list, drop zone)
//! - [`components`] - UI components
//! - [`services`] - Upload gateway

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod wizard;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, UploadNotice, UploadResult};

// Wizard core
pub use wizard::{
    // Navigation
    WizardState, WizardController, StepTransition, Dispatcher, NoticeSink,
    // Stepper
    step_markers, StepMarker, Connector,
    // Job links
    JobLinkList, ListEdit, IndexOutOfRange,
    // Drop zone
    FileAcquisition, AcquiredFile, Acquisition, AcquisitionSource, RejectReason,
};

// Components
pub use components::*;

// Services
pub use services::{HttpUploadGateway, UploadGateway};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Resume Optimizer - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Resume Optimizer"/>
        <Router>
            <Navbar/>
            <Routes>
                <Route path="/" view=Home/>
                <Route path="/optimizer" view=Optimizer/>
                <Route path="/about" view=About/>
                <Route path="/contact" view=Contact/>
            </Routes>
        </Router>
    }
}
