//! HTTP API for patent claims lookup.
//!
//! ## Endpoints
//!
//! - `GET /health`: liveness check
//! - `POST /api/patent`: `{"patentNumber": "US8,848,839"}` in,
//!   `{"claims": [{"number": "1", "text": "..."}]}` or `{"error": "..."}` out

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use patent_scrape::{ClaimsResult, ScrapeConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{Instrument, info};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::{LookupError, ServiceError};
use crate::lookup::lookup_claims;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /api/patent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatentRequest {
    /// Free-form patent identifier.
    #[serde(rename = "patentNumber", default)]
    pub patent_number: Option<String>,
}

/// Successful lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentResponse {
    /// Claims in first-seen order. Never empty.
    pub claims: ClaimsResult,
}

/// Failed lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Caller-facing message.
    pub error: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    scrape: Arc<ScrapeConfig>,
}

/// Build the API router around the given scrape settings.
pub fn router(scrape: ScrapeConfig) -> Router {
    let state = AppState {
        scrape: Arc::new(scrape),
    };

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/patent", post(handle_patent))
        .with_state(state)
}

/// Running API server.
pub struct ClaimsServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl ClaimsServer {
    /// Start the API server.
    ///
    /// Validates `config`, binds to `{server.host}:{server.port}` (use port
    /// `0` for auto-assign) and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the listener cannot bind.
    pub async fn start(config: &ServiceConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        let app = router(config.scrape.clone());

        let bind_addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServiceError::Server(format!("bind to {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServiceError::Server(format!("failed to get local addr: {e}")))?;

        info!("patent claims API listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("patent claims API error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// The bound socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The bound port.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Base URL of the running server, e.g. `http://127.0.0.1:8787`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ClaimsServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_patent(
    State(state): State<AppState>,
    body: Result<Json<PatentRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("patent_lookup", %request_id);

    async move {
        let patent_number = match body {
            Ok(Json(request)) => request.patent_number,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unreadable request body");
                None
            }
        };

        match lookup_claims(patent_number.as_deref(), &state.scrape).await {
            Ok(claims) => {
                info!(count = claims.len(), "claims returned");
                (StatusCode::OK, Json(PatentResponse { claims })).into_response()
            }
            Err(err) => {
                log_lookup_error(&err);
                error_response(&err)
            }
        }
    }
    .instrument(span)
    .await
}

fn log_lookup_error(err: &LookupError) {
    match err {
        LookupError::MissingIdentifier => tracing::debug!("request without patent number"),
        LookupError::NoClaimsFound => info!("no claims found"),
        LookupError::Retrieval(detail) => tracing::warn!(%detail, "patent page retrieval failed"),
        LookupError::Unexpected(detail) => tracing::error!(%detail, "patent lookup failed"),
    }
}

fn error_response(err: &LookupError) -> Response {
    let body = ErrorResponse {
        error: err.public_message().to_owned(),
    };
    (err.status(), Json(body)).into_response()
}
