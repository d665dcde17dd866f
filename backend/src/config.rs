//! Service configuration.
//!
//! Loaded from the environment (and a `.env` file when present):
//!
//! | Variable           | Default     | Meaning                                   |
//! |--------------------|-------------|-------------------------------------------|
//! | `PORT`             | `8000`      | Listening port                            |
//! | `DEBUG`            | off         | Pre-register `DEBUG_TOKEN`                |
//! | `DEBUG_TOKEN`      | `dev-token` | Token accepted without calling `/auth`    |
//! | `MAX_UPLOAD_BYTES` | 10 MiB      | Largest accepted resume                   |
//! | `MAX_TOKENS`       | `10000`     | Issued tokens kept before evicting oldest |
//! | `MAX_SUBMISSIONS`  | `1000`      | Submissions kept before evicting oldest   |

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_DEBUG_TOKEN: &str = "dev-token";

/// 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const DEFAULT_MAX_TOKENS: usize = 10_000;

pub const DEFAULT_MAX_SUBMISSIONS: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Set only when `DEBUG` is on.
    pub debug_token: Option<String>,
    pub max_upload_bytes: usize,
    pub max_tokens: usize,
    pub max_submissions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug_token: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
        }
    }
}

impl ServerConfig {
    /// Read from the process environment after loading `.env`.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; used by `from_env` and by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let port = match lookup("PORT") {
            Some(raw) => parse("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => parse("MAX_UPLOAD_BYTES", &raw)?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let max_tokens = match lookup("MAX_TOKENS") {
            Some(raw) => parse_capacity("MAX_TOKENS", &raw)?,
            None => DEFAULT_MAX_TOKENS,
        };

        let max_submissions = match lookup("MAX_SUBMISSIONS") {
            Some(raw) => parse_capacity("MAX_SUBMISSIONS", &raw)?,
            None => DEFAULT_MAX_SUBMISSIONS,
        };

        let debug = lookup("DEBUG").map(|raw| is_truthy(&raw)).unwrap_or(false);
        let debug_token = debug.then(|| {
            lookup("DEBUG_TOKEN")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DEBUG_TOKEN.to_string())
        });

        Ok(Self {
            port,
            debug_token,
            max_upload_bytes,
            max_tokens,
            max_submissions,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Like [`parse`], but zero is refused.
fn parse_capacity(key: &'static str, raw: &str) -> ConfigResult<usize> {
    match parse(key, raw)? {
        0 => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
        n => Ok(n),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
