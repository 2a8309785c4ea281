/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body / redirect)
 * - gate の deny と session-fetch failure をここで HTTP に変換する
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Gate decision: requirement not met. A normal branch, not a fault.
    #[error("access denied")]
    AccessDenied,
    /// Session could not be fetched; send the client to the login flow.
    /// `location` already carries the url return-target parameter.
    #[error("login required")]
    LoginRedirect { location: String },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn access_denied() -> Self {
        Self::AccessDenied
    }

    pub fn login_redirect(location: impl Into<String>) -> Self {
        Self::LoginRedirect {
            location: location.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // 303 so the client re-requests the login page with GET.
            AppError::LoginRedirect { location } => {
                return Redirect::to(&location).into_response();
            }
            AppError::AccessDenied => (
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "You don't have required role to access this page".to_string(),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}
