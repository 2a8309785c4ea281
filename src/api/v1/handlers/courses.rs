/*
 * Responsibility
 * - course-scoped な route 群 (requirement: allowed_roles、course は path から解決)
 */
use axum::{Json, extract::Path};
use serde_json::{Value, json};

use crate::api::v1::extractors::SessionCtxExtractor;
use crate::domain::session::CourseId;

pub async fn list_students(
    Path(course_id): Path<CourseId>,
    SessionCtxExtractor(ctx): SessionCtxExtractor,
) -> Json<Value> {
    Json(json!({
        "courseId": course_id,
        "callerRoles": ctx.session().roles_in_course(course_id),
        "data": [],
    }))
}

pub async fn list_mentors(
    Path(course_id): Path<CourseId>,
    SessionCtxExtractor(ctx): SessionCtxExtractor,
) -> Json<Value> {
    Json(json!({
        "courseId": course_id,
        "callerRoles": ctx.session().roles_in_course(course_id),
        "data": [],
    }))
}
