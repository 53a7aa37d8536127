use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::Json,
};
use common::ErrorResponse;
use compute::InvoiceStore;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Header carrying the caller's session identifier.
pub const SESSION_HEADER: &str = "x-session-id";
/// Session used by requests without a session header.
pub const DEFAULT_SESSION: &str = "default";

const MAX_SESSION_ID_LEN: usize = 128;

/// One session's store. The lock is held for a whole action.
pub type SharedStore = Arc<Mutex<InvoiceStore>>;

/// Maps session identifiers to their invoice stores.
///
/// Sessions are created on first use and dropped after the idle timeout, when
/// the capacity bound evicts them, or when ended explicitly.
#[derive(Clone, Debug)]
pub struct SessionRegistry {
    sessions: Cache<String, SharedStore>,
}

impl SessionRegistry {
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .eviction_listener(|session_id: Arc<String>, _store, cause| {
                debug!("Session {} dropped ({:?})", session_id, cause);
            })
            .build();

        Self { sessions }
    }

    /// Returns the session's store, creating an empty one if needed.
    pub async fn store(&self, session_id: &str) -> SharedStore {
        self.sessions
            .get_with(session_id.to_string(), async {
                info!("Starting session {}", session_id);
                Arc::new(Mutex::new(InvoiceStore::new()))
            })
            .await
    }

    /// Drops a session and returns how many records it held.
    pub async fn end(&self, session_id: &str) -> usize {
        match self.sessions.remove(session_id).await {
            Some(store) => {
                let discarded = store.lock().await.total_len();
                info!("Ended session {}, discarded {} record(s)", session_id, discarded);
                discarded
            }
            None => {
                debug!("Session {} was not active", session_id);
                0
            }
        }
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }
}

/// Session identifier taken from the `x-session-id` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SESSION_HEADER) else {
            return Ok(SessionId(DEFAULT_SESSION.to_string()));
        };

        let session_id = value.to_str().map(str::trim).unwrap_or_default();
        if session_id.is_empty() || session_id.len() > MAX_SESSION_ID_LEN {
            warn!("Rejected malformed {} header", SESSION_HEADER);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "INVALID_SESSION",
                    format!(
                        "The {} header must hold 1 to {} visible ASCII characters",
                        SESSION_HEADER, MAX_SESSION_ID_LEN
                    ),
                )),
            ));
        }

        Ok(SessionId(session_id.to_string()))
    }
}
