/*
 * Responsibility
 * - GET /me — gate を通過したセッションの内容を返す
 * - 空の requirement (session さえ解決できれば誰でも通る) の確認用
 */
use axum::Json;

use crate::api::v1::dto::session::SessionView;
use crate::api::v1::extractors::SessionCtxExtractor;

pub async fn me(SessionCtxExtractor(ctx): SessionCtxExtractor) -> Json<SessionView> {
    Json(SessionView::from(ctx.session()))
}
