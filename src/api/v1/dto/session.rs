/*
 * Responsibility
 * - Session の response DTO (ドメイン型をそのまま晒さない)
 */
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::session::{CourseId, CourseRole, Session};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub is_admin: bool,
    pub is_hirer: bool,
    pub courses: HashMap<CourseId, Vec<CourseRole>>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            is_admin: session.is_admin,
            is_hirer: session.is_hirer,
            courses: session
                .courses
                .iter()
                .map(|(id, m)| (*id, m.roles.clone()))
                .collect(),
        }
    }
}
