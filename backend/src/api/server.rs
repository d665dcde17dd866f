//! HTTP Server for the resume intake API.
//!
//! # API Endpoints
//!
//! | Method | Path                   | Description                          |
//! |--------|------------------------|--------------------------------------|
//! | GET    | `/health`              | Health check                         |
//! | GET    | `/auth`                | Issue an access token                |
//! | POST   | `/resume?token=`       | Upload a resume (multipart `resume`) |
//! | GET    | `/resume/{id}?token=`  | Submission status                    |
//! | GET    | `/events`              | SSE stream of intake events          |

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use super::events::{emit_info, emit_warning, IntakeEvent, EVENT_BROADCASTER};
use super::types::{AuthResponse, QueuedResponse, SubmissionView, TokenQuery};
use crate::config::ServerConfig;
use crate::error::{IntakeError, ServerError, ServerResult};
use crate::intake::{ResumeUpload, RESUME_FIELD};
use crate::store::{Submission, SubmissionStore};
use crate::tokens::TokenRegistry;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// State shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub tokens: TokenRegistry,
    pub store: SubmissionStore,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the state, pre-registering the debug token when configured.
    pub fn new(config: ServerConfig) -> Self {
        let tokens = TokenRegistry::with_capacity(config.max_tokens);
        if let Some(token) = &config.debug_token {
            tokens.register(token.clone());
        }
        let store = SubmissionStore::with_capacity(config.max_submissions);
        Self {
            config,
            tokens,
            store,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

/// Build the router with permissive CORS, so the WASM frontend can call it
/// from another origin.
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let body_limit = state.config.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/auth", get(issue_token))
        .route("/resume", post(post_resume))
        .route("/resume/{id}", get(get_submission))
        .route("/events", get(sse_events))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let debug = config.debug_token.is_some();
    let state = AppState::new(config).shared();

    println!("🚀 Resume intake running on http://localhost:{}", addr.port());
    println!("   GET  /auth         - Issue access token");
    println!("   POST /resume       - Upload resume (multipart 'resume')");
    println!("   GET  /resume/{{id}}  - Submission status");
    println!("   GET  /events       - SSE event stream");
    println!("   GET  /health       - Health check");
    if debug {
        println!();
        println!("🐛 DEBUG mode: debug token pre-registered");
    }

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, state: SharedState) -> ServerResult<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resumeopt",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "GET /auth",
            "upload": "POST /resume?token=",
            "status": "GET /resume/{id}?token=",
            "events": "GET /events (SSE)"
        }
    }))
}

async fn issue_token(State(state): State<SharedState>) -> Json<AuthResponse> {
    let token = state.tokens.issue();
    if let Some(order) = state.tokens.order(&token) {
        emit_info(format!("Issued token #{}", order));
    }
    Json(AuthResponse { auth: token })
}

/// SSE endpoint for real-time intake events
async fn sse_events() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = EVENT_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let json = serde_json::to_string(&event).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Upload resume endpoint
async fn post_resume(
    State(state): State<SharedState>,
    Query(query): Query<TokenQuery>,
    mut multipart: Multipart,
) -> ServerResult<Json<QueuedResponse>> {
    let token = authorize(&state, query.token.as_deref())?;
    let upload = read_resume(&mut multipart).await?;

    if let Err(e) = upload.validate(state.config.max_upload_bytes) {
        emit_warning(format!("Rejected {}: {}", upload.display_name(), e));
        return Err(e.into());
    }

    // Only metadata is kept.
    let file_name = upload.display_name().to_string();
    let submission = Submission::new(token, &upload);
    drop(upload);

    let id = submission.id;
    let size = submission.size;
    if let Some(evicted) = state.store.insert(submission) {
        emit_info(format!("Store full, dropped submission {}", evicted));
    }

    EVENT_BROADCASTER.emit(
        IntakeEvent::success(format!("Queued {} ({} bytes)", file_name, size)).for_submission(id),
    );

    Ok(Json(QueuedResponse::new(id)))
}

/// Submission status endpoint
async fn get_submission(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<TokenQuery>,
) -> ServerResult<Json<SubmissionView>> {
    let token = authorize(&state, query.token.as_deref())?;
    let uuid = Uuid::parse_str(&id).map_err(|_| ServerError::NotFound(id.clone()))?;

    state
        .store
        .get_owned(&uuid, token)
        .map(|submission| Json(SubmissionView::from(&submission)))
        .ok_or(ServerError::NotFound(id))
}

fn authorize<'a>(state: &AppState, token: Option<&'a str>) -> ServerResult<&'a str> {
    match token {
        Some(token) if state.tokens.contains(token) => Ok(token),
        _ => {
            emit_warning("Request with invalid token");
            Err(ServerError::InvalidToken)
        }
    }
}

/// Pull the `resume` field out of the multipart body, skipping any others.
async fn read_resume(multipart: &mut Multipart) -> ServerResult<ResumeUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Read error: {}", e)))?
            .to_vec();

        return Ok(ResumeUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(IntakeError::MissingField(RESUME_FIELD).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_token_is_preregistered() {
        let config = ServerConfig {
            debug_token: Some("dev-token".into()),
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        assert!(state.tokens.contains("dev-token"));
        assert!(authorize(&state, Some("dev-token")).is_ok());
    }

    #[test]
    fn test_authorize_rejects_missing_and_unknown() {
        let state = AppState::new(ServerConfig::default());
        assert!(matches!(authorize(&state, None), Err(ServerError::InvalidToken)));
        assert!(matches!(authorize(&state, Some("nope")), Err(ServerError::InvalidToken)));
    }
}
