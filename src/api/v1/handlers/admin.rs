/*
 * Responsibility
 * - admin-only な route 群 (requirement: admin_only)
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::SessionCtxExtractor;

pub async fn stats(SessionCtxExtractor(ctx): SessionCtxExtractor) -> Json<Value> {
    // Placeholder payload until the admin dashboard lands; the point here is
    // that only admins can reach it.
    Json(json!({
        "data": {
            "enrolledCourses": ctx.session().courses.len(),
        }
    }))
}
