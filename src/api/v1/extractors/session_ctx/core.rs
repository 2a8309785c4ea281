use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

use super::SessionCtx;

/// Handler で SessionCtx を受け取るための extractor
/// gate middleware が SessionCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（gate がかかってない・ミドルウェア未設定）
pub struct SessionCtxExtractor(pub SessionCtx);

impl FromRequestParts<AppState> for SessionCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionCtx>()
            .cloned()
            .map(SessionCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
