//! Process-wide session cache with single-flight fetch.
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::session::Session;
use crate::services::session::client::{SessionClient, SessionResult};

/// Caches the session for the lifetime of the process.
///
/// Contract:
/// - `get()` returns the cached session, or fetches it from the backend and
///   caches it on success. Errors are returned to the caller and never
///   cached, so the next call retries.
/// - The lock is held across the fetch: concurrent first callers queue
///   behind the single in-flight request instead of racing their own.
/// - `init()` clears the cache (logout / forced re-auth); the next `get()`
///   fetches again.
///
/// Cheap to clone; all clones share the same cache.
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: Arc<dyn SessionClient>,
    cached: Mutex<Option<Session>>,
}

impl SessionStore {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                cached: Mutex::new(None),
            }),
        }
    }

    /// Cached session, or exactly one backend fetch.
    pub async fn get(&self) -> SessionResult<Session> {
        let mut cached = self.inner.cached.lock().await;
        if let Some(session) = cached.as_ref() {
            return Ok(session.clone());
        }

        let session = self.inner.client.fetch().await?;
        *cached = Some(session.clone());
        Ok(session)
    }

    /// Drop the cached session so the next `get()` refetches.
    pub async fn init(&self) {
        *self.inner.cached.lock().await = None;
    }

    pub fn backend_name(&self) -> &'static str {
        self.inner.client.backend_name()
    }
}
