/*
 * Responsibility
 * - GET /health (疎通用)
 * - gate を通さない route の確認用 (session backend には触らない)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
