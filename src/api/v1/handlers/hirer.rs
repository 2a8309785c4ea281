/*
 * Responsibility
 * - hirer 向け route 群 (requirement: hirer_only, admin は常に通る)
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::SessionCtxExtractor;

pub async fn candidates(SessionCtxExtractor(_ctx): SessionCtxExtractor) -> Json<Value> {
    Json(json!({ "data": [] }))
}
