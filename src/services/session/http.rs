use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::domain::session::Session;
use crate::services::session::client::{SessionClient, SessionClientError, SessionResult};

/// The backend wraps the session in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    data: Session,
}

/// HTTP session backend client.
///
/// Performs `GET {origin}/api/session` and expects a 2xx response with the
/// envelope shape above. Anything else (non-2xx, connect error, malformed
/// body) is an error; the store never caches those.
#[derive(Clone, Debug)]
pub struct HttpSessionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSessionClient {
    /// Build a client for the given backend origin, e.g. `http://localhost:8080`.
    pub fn new(origin: &str, timeout: Duration) -> Result<Self, SessionClientError> {
        let base = Url::parse(origin)
            .map_err(|e| SessionClientError::Connection(format!("invalid origin: {e}")))?;
        let endpoint = base
            .join("/api/session")
            .map_err(|e| SessionClientError::Connection(format!("invalid origin: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SessionClientError::Connection(e.to_string()))?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> SessionResult<Session> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| SessionClientError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionClientError::UnexpectedStatus(status.as_u16()));
        }

        let envelope: SessionEnvelope = response
            .json()
            .await
            .map_err(|e| SessionClientError::InvalidPayload(e.to_string()))?;

        Ok(envelope.data)
    }
}
