/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /me, /admin, /hirer, /courses を merge
 * - gate (requirement) を掛ける範囲をここで決める
 */
use axum::{Router, routing::get};

use crate::domain::access::AccessRequirement;
use crate::domain::session::CourseRole;
use crate::middleware::session_gate;
use crate::state::AppState;

use crate::api::v1::handlers::{admin, courses, health::health, hirer, me::me};

pub fn routes(state: AppState) -> Router<AppState> {
    // Session required, no role constraints.
    let me = session_gate::apply(
        Router::new().route("/me", get(me)),
        state.clone(),
        AccessRequirement::new(),
    );

    let admin = session_gate::apply(
        Router::new().route("/admin/stats", get(admin::stats)),
        state.clone(),
        AccessRequirement::new().admin_only(),
    );

    let hirer = session_gate::apply(
        Router::new().route("/hirer/candidates", get(hirer::candidates)),
        state.clone(),
        AccessRequirement::new().hirer_only(),
    );

    // Course staff only; the target course comes from the path.
    let course_students = session_gate::apply(
        Router::new().route("/courses/{course_id}/students", get(courses::list_students)),
        state.clone(),
        AccessRequirement::new().allow_roles([
            CourseRole::Mentor,
            CourseRole::Manager,
            CourseRole::Supervisor,
        ]),
    );

    // Same staff roles, but staff of *any* course may look at the mentor list.
    let course_mentors = session_gate::apply(
        Router::new().route("/courses/{course_id}/mentors", get(courses::list_mentors)),
        state,
        AccessRequirement::new()
            .allow_roles([
                CourseRole::Mentor,
                CourseRole::Manager,
                CourseRole::Supervisor,
            ])
            .any_course_power_user(),
    );

    Router::new()
        .route("/health", get(health))
        .merge(me)
        .merge(admin)
        .merge(hirer)
        .merge(course_students)
        .merge(course_mentors)
}
