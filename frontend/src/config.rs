//! Application configuration.
//!
//! Centralized configuration for the optimizer frontend. Values that
//! differ between deployments can be overridden at build time through
//! environment variables read with `option_env!`:
//!
//! - `RESUME_API_URL` - base URL of the intake service
//! - `RESUME_API_TOKEN` - access token appended to the upload URL

/// Default intake service base URL.
///
/// Matches the backend's default `PORT`.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default access token.
///
/// The intake service pre-registers this token when started with `DEBUG=1`.
pub const DEFAULT_API_TOKEN: &str = "dev-token";

/// The only MIME type the resume drop zone accepts.
pub const PDF_MIME: &str = "application/pdf";

/// Multipart field carrying the resume bytes.
pub const RESUME_FIELD: &str = "resume";

/// Number of empty job-link inputs shown when the wizard opens.
pub const INITIAL_JOB_LINKS: usize = 3;

/// Wizard step labels, in order.
pub const WIZARD_STEPS: [&str; 3] = ["Resume and Job info", "Template Selection", "Download file"];

/// How long an upload notice stays on screen (milliseconds).
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Connection settings for the upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// Base URL, without the `/resume` path.
    pub base_url: String,
    /// Token sent as the `token` query parameter.
    pub token: String,
}

impl UploadConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Build from `RESUME_API_URL` / `RESUME_API_TOKEN` as seen by the compiler,
    /// falling back to the development defaults.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("RESUME_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("RESUME_API_TOKEN").unwrap_or(DEFAULT_API_TOKEN),
        )
    }

    /// Full URL of the upload endpoint, without the query string.
    pub fn endpoint(&self) -> String {
        format!("{}/resume", self.base_url.trim_end_matches('/'))
    }

    /// Query parameters attached to every upload.
    pub fn query(&self) -> [(&'static str, &str); 1] {
        [("token", self.token.as_str())]
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let config = UploadConfig::new("https://api.example.com/", "abc");
        assert_eq!(config.endpoint(), "https://api.example.com/resume");
        assert_eq!(config.query(), [("token", "abc")]);
    }

    #[test]
    fn build_env_falls_back_to_defaults() {
        let config = UploadConfig::from_build_env();
        assert!(!config.base_url.is_empty());
        assert!(!config.token.is_empty());
    }
}
