/*
 * Responsibility
 * - Handler から見える「解決済みセッション」の型
 * - gate middleware が request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - fetch / caching / rule evaluation は services・middleware 側の責務
 * - Arc で共有し read-only に保つ (descendants は mutate しない契約)
 */
use std::sync::Arc;

use crate::domain::session::Session;

/// Session context attached to requests that passed the gate.
#[derive(Debug, Clone)]
pub struct SessionCtx {
    session: Arc<Session>,
}

impl SessionCtx {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(session),
        }
    }

    /// Read-only view of the resolved session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}
