//! Spawns the intake service on an ephemeral port for integration tests.

use resumeopt::server::{serve, AppState};
use resumeopt::ServerConfig;
use tokio::net::TcpListener;

pub const DEBUG_TOKEN: &str = "dev-token";

/// Starts the service in a background task and returns its base URL
/// (e.g. "http://127.0.0.1:12345"). Runs until the test runtime shuts down.
pub async fn start(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().unwrap().port();
    let state = AppState::new(config).shared();
    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });
    format!("http://127.0.0.1:{}", port)
}

/// Debug mode with a small upload limit.
pub fn debug_config(max_upload_bytes: usize) -> ServerConfig {
    ServerConfig {
        debug_token: Some(DEBUG_TOKEN.to_string()),
        max_upload_bytes,
        ..ServerConfig::default()
    }
}

pub fn resume_form(name: &str, mime: &str, bytes: Vec<u8>) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .expect("valid mime");
    reqwest::multipart::Form::new().part("resume", part)
}

pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n".to_vec()
}
