/*
 * Responsibility
 * - Session / CourseRole のドメイン型 (backend payload と同じ形)
 * - per-course / any-course の role lookup helpers
 */
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Course identifier as issued by the backend.
pub type CourseId = i64;

/// Role a user can hold inside a single course.
///
/// Serialized lowercase to match the backend payload (`"mentor"` etc.).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseRole {
    Student,
    Mentor,
    Manager,
    Supervisor,
    Dementor,
}

/// Per-course membership entry: the roles the user holds in that course.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CourseMembership {
    #[serde(default)]
    pub roles: Vec<CourseRole>,
}

/// The authenticated user's identity and entitlements for this process.
///
/// Fetched once from the session backend and cached by `SessionStore`;
/// consumers only ever see it read-only.
///
/// Invariant: `is_admin == true` bypasses every role/hirer check
/// (union of all permissions). Enforced in `domain::access::evaluate`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_hirer: bool,
    // The backend may omit the map entirely for users with no enrollments.
    #[serde(default)]
    pub courses: HashMap<CourseId, CourseMembership>,
}

impl Session {
    /// Roles held in the given course; empty slice when not enrolled.
    pub fn roles_in_course(&self, course: CourseId) -> &[CourseRole] {
        self.courses
            .get(&course)
            .map(|m| m.roles.as_slice())
            .unwrap_or(&[])
    }

    /// True if the user holds `role` in at least one course (any course).
    pub fn has_role_in_any_course(&self, role: CourseRole) -> bool {
        self.courses.values().any(|m| m.roles.contains(&role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(course: CourseId, roles: &[CourseRole]) -> Session {
        let mut courses = HashMap::new();
        courses.insert(
            course,
            CourseMembership {
                roles: roles.to_vec(),
            },
        );
        Session {
            is_admin: false,
            is_hirer: false,
            courses,
        }
    }

    #[test]
    fn roles_in_course_empty_when_not_enrolled() {
        let session = session_with(1, &[CourseRole::Student]);
        assert!(session.roles_in_course(2).is_empty());
        assert_eq!(session.roles_in_course(1), &[CourseRole::Student]);
    }

    #[test]
    fn has_role_in_any_course_scans_all_memberships() {
        let mut session = session_with(1, &[CourseRole::Student]);
        session.courses.insert(
            7,
            CourseMembership {
                roles: vec![CourseRole::Mentor],
            },
        );
        assert!(session.has_role_in_any_course(CourseRole::Mentor));
        assert!(!session.has_role_in_any_course(CourseRole::Manager));
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "isAdmin": false,
            "isHirer": true,
            "courses": { "11": { "roles": ["mentor", "student"] } }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(!session.is_admin);
        assert!(session.is_hirer);
        assert_eq!(
            session.roles_in_course(11),
            &[CourseRole::Mentor, CourseRole::Student]
        );
    }

    #[test]
    fn missing_fields_default_to_no_permissions() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert!(!session.is_admin);
        assert!(!session.is_hirer);
        assert!(session.courses.is_empty());
    }
}
