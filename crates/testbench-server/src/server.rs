// crates/testbench-server/src/server.rs
// ============================================================================
// Module: Traveller Service Server
// Description: Axum server exposing the greeting and traveller routes.
// Purpose: Serve the demo routes with fail-closed request handling.
// Dependencies: crate::{audit, config}, axum, tokio
// ============================================================================

//! ## Overview
//! The server exposes three routes: `GET /hello` greets by query name or the
//! configured fallback, `PUT /travellers` echoes a submitted surname as JSON,
//! and `GET /` serves the HTML form page. Bodies beyond the configured limit
//! and malformed submissions are rejected with JSON error payloads. Binding
//! and serving are split so tests can bind port zero and read the local
//! address before the server runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::put;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::audit::AuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::RequestAuditEvent;
use crate::audit::StderrAuditSink;
use crate::config::ConfigError;
use crate::config::ServerConfig;

// ============================================================================
// SECTION: Index Page
// ============================================================================

/// HTML form page served at the root route.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Famous Italian Explorers</title>
  </head>
  <body>
    <h1>Famous Italian Explorers</h1>
    <form id="traveller-form" action="/travellers" method="put">
      <label for="surname-input">Surname</label>
      <input id="surname-input" name="surname" type="text" />
      <button name="submit" type="submit">Submit</button>
    </form>
    <h2>Traveller</h2>
    <p><span id="surname"></span></p>
  </body>
</html>
"#;

// ============================================================================
// SECTION: Payload Types
// ============================================================================

/// Query parameters accepted by the greeting route.
#[derive(Debug, Deserialize)]
struct HelloParams {
    /// Optional name to greet.
    name: Option<String>,
}

/// Traveller form submission body.
#[derive(Debug, Clone, Deserialize)]
pub struct TravellerSubmission {
    /// Submitted surname.
    pub surname: String,
}

/// Traveller record echoed back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct TravellerRecord {
    /// Recorded surname.
    pub surname: String,
}

/// JSON error payload for rejected requests.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Stable rejection reason.
    error: &'static str,
}

// ============================================================================
// SECTION: Server
// ============================================================================

/// Shared state for route handlers.
struct ServerState {
    /// Greeting fallback name.
    default_name: String,
    /// Maximum accepted request body size.
    max_body_bytes: usize,
    /// Request audit sink.
    audit: Arc<dyn AuditSink>,
}

/// Traveller demo server.
pub struct HelloServer {
    /// Validated configuration.
    config: ServerConfig,
    /// Request audit sink.
    audit: Arc<dyn AuditSink>,
}

impl HelloServer {
    /// Builds a server from configuration with the stderr audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration fails validation.
    pub fn from_config(config: ServerConfig) -> Result<Self, ServerError> {
        Self::with_audit(config, Arc::new(StderrAuditSink))
    }

    /// Builds a server with a caller-supplied audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration fails validation.
    pub fn with_audit(config: ServerConfig, audit: Arc<dyn AuditSink>) -> Result<Self, ServerError> {
        config.validate()?;
        Ok(Self {
            config,
            audit,
        })
    }

    /// Builds a server with the no-op audit sink, for tests.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration fails validation.
    pub fn silent(config: ServerConfig) -> Result<Self, ServerError> {
        Self::with_audit(config, Arc::new(NoopAuditSink))
    }

    /// Binds the configured address and returns the listener.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the address does not parse or the bind
    /// fails.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr: SocketAddr = self
            .config
            .bind
            .parse()
            .map_err(|_| ServerError::Bind(self.config.bind.clone(), "invalid address".to_owned()))?;
        TcpListener::bind(addr)
            .await
            .map_err(|err| ServerError::Bind(self.config.bind.clone(), err.to_string()))
    }

    /// Binds and serves until the task is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.serve_on(listener).await
    }

    /// Serves requests on an already-bound listener.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the server fails.
    pub async fn serve_on(self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            let _ = writeln!(std::io::stderr(), "testbench-server: listening on {addr}");
        }
        let app = self.router();
        axum::serve(listener, app)
            .await
            .map_err(|err| ServerError::Serve(err.to_string()))
    }

    /// Builds the route table.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = Arc::new(ServerState {
            default_name: self.config.default_name.clone(),
            max_body_bytes: self.config.max_body_bytes,
            audit: Arc::clone(&self.audit),
        });
        Router::new()
            .route("/", get(index))
            .route("/hello", get(hello))
            .route("/travellers", put(travellers))
            .with_state(state)
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Serves the HTML form page.
async fn index(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    state.audit.record(&RequestAuditEvent {
        method: "GET",
        path: "/",
        status: StatusCode::OK.as_u16(),
        outcome: "ok",
    });
    Html(INDEX_HTML)
}

/// Greets the query name or the configured fallback.
async fn hello(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HelloParams>,
) -> impl IntoResponse {
    // An empty name falls back like a missing one.
    let name = params
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| state.default_name.clone());
    state.audit.record(&RequestAuditEvent {
        method: "GET",
        path: "/hello",
        status: StatusCode::OK.as_u16(),
        outcome: "ok",
    });
    (StatusCode::OK, format!("hello {name}"))
}

/// Echoes a traveller submission or rejects it fail-closed.
async fn travellers(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let (status, outcome, response) = if body.len() > state.max_body_bytes {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "rejected",
            (
                StatusCode::PAYLOAD_TOO_LARGE,
                axum::Json(ErrorBody {
                    error: "request body too large",
                }),
            )
                .into_response(),
        )
    } else {
        match serde_json::from_slice::<TravellerSubmission>(&body) {
            Ok(submission) => (
                StatusCode::OK,
                "ok",
                (
                    StatusCode::OK,
                    axum::Json(TravellerRecord {
                        surname: submission.surname,
                    }),
                )
                    .into_response(),
            ),
            Err(_) => (
                StatusCode::BAD_REQUEST,
                "rejected",
                (
                    StatusCode::BAD_REQUEST,
                    axum::Json(ErrorBody {
                        error: "invalid traveller submission",
                    }),
                )
                    .into_response(),
            ),
        }
    };
    state.audit.record(&RequestAuditEvent {
        method: "PUT",
        path: "/travellers",
        status: status.as_u16(),
        outcome,
    });
    response
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Server construction and runtime failures.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration failed validation.
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
    /// Binding the listen address failed.
    #[error("bind failed on {0}: {1}")]
    Bind(String, String),
    /// The running server failed.
    #[error("server failed: {0}")]
    Serve(String),
}
