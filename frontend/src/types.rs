//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Upload Types** - outcome of one upload attempt and its notice
//! - **Error Types** - frontend error handling

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Upload Types
// =============================================================================

/// Outcome of a single upload attempt.
///
/// Transient: it is handed to the notice callback and then dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadResult {
    /// `true` when the endpoint answered with a 2xx status.
    pub ok: bool,
}

impl UploadResult {
    pub fn success() -> Self {
        Self { ok: true }
    }

    pub fn failure() -> Self {
        Self { ok: false }
    }
}

static NEXT_NOTICE: AtomicU64 = AtomicU64::new(0);

/// Non-blocking feedback about a finished upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadNotice {
    /// Increases with every notice; identical uploads still differ here
    pub seq: u64,
    /// Name of the uploaded file
    pub file_name: String,
    /// Whether the upload succeeded
    pub ok: bool,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl UploadNotice {
    pub fn new(file_name: impl Into<String>, result: UploadResult) -> Self {
        Self {
            seq: NEXT_NOTICE.fetch_add(1, Ordering::Relaxed),
            file_name: file_name.into(),
            ok: result.ok,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    /// Text shown in the toast.
    pub fn message(&self) -> String {
        if self.ok {
            format!("{} uploaded", self.file_name)
        } else {
            format!("Could not upload {}", self.file_name)
        }
    }

    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        if self.ok {
            "notice notice-success"
        } else {
            "notice notice-error"
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Building the upload request failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Invalid configuration or input.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
