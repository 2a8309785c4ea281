//! Session backend interface used by the store (and stubbed in tests).
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::Session;

/// Result type for session backend operations.
pub type SessionResult<T> = Result<T, SessionClientError>;

/// Transport-layer errors from the session backend.
///
/// Note:
/// - Kept independent from `AppError` so the caller decides how to fail.
///   The gate middleware maps every variant to a login redirect; other
///   callers may want to fail differently.
#[derive(Debug, Error)]
pub enum SessionClientError {
    #[error("session backend connection error: {0}")]
    Connection(String),
    #[error("session backend returned status {0}")]
    UnexpectedStatus(u16),
    #[error("session payload invalid: {0}")]
    InvalidPayload(String),
}

/// A minimal session backend interface.
///
/// Intentionally a single operation: the gate only ever needs "give me the
/// current session". Caching, single-flight and retry-on-next-call policy
/// all live in `SessionStore`, not here.
#[async_trait]
pub trait SessionClient: std::fmt::Debug + Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Fetch the current session. One call per invocation, no caching.
    async fn fetch(&self) -> SessionResult<Session>;
}
