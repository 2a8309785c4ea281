/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - sessions: SessionStore, login_path, missing-course policy
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::domain::access::MissingCoursePolicy;
use crate::services::session::SessionStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionStore,
    pub login_path: Arc<str>,
    pub missing_course: MissingCoursePolicy,
}

impl AppState {
    pub fn new(
        sessions: SessionStore,
        login_path: &str,
        missing_course: MissingCoursePolicy,
    ) -> Self {
        Self {
            sessions,
            login_path: Arc::from(login_path),
            missing_course,
        }
    }
}
