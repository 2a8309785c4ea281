//! Access gate: session resolution → rule evaluation → grant/deny/redirect.
//!
//! Per request, in order:
//! - ask `SessionStore` for the session (at most one backend fetch per
//!   process; the request suspends while the fetch is in flight);
//! - fetch failed → 303 to the login flow, with the original path+query
//!   url-encoded into the `url` parameter so the client can come back;
//! - evaluate the route group's rules; denied → 403;
//! - granted → insert `SessionCtx` into request extensions and run the
//!   inner service. Handlers read it through `SessionCtxExtractor`.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::{Request, Uri},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::SessionCtx;
use crate::domain::access::{AccessDecision, AccessRequirement, AccessRule, evaluate};
use crate::domain::session::CourseId;
use crate::error::AppError;
use crate::state::AppState;

/// Gate every route of `router` behind `requirement`.
///
/// 例：
/// ```ignore
/// let admin = Router::new().route("/admin/stats", get(admin_stats));
/// let admin = session_gate::apply(admin, state.clone(), AccessRequirement::new().admin_only());
/// ```
pub fn apply(
    router: Router<AppState>,
    state: AppState,
    requirement: AccessRequirement,
) -> Router<AppState> {
    let rules: Arc<[AccessRule]> = requirement.into_rules().into();

    // from_fn は closure の追加引数を取れないため、rules は capture で渡す
    router.layer(middleware::from_fn_with_state(
        state,
        move |state: State<AppState>,
              original_uri: OriginalUri,
              req: Request<Body>,
              next: Next| {
            let rules = Arc::clone(&rules);
            gate_middleware(state, original_uri, rules, req, next)
        },
    ))
}

async fn gate_middleware(
    State(state): State<AppState>,
    OriginalUri(original_uri): OriginalUri,
    rules: Arc<[AccessRule]>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = match state.sessions.get().await {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                backend = state.sessions.backend_name(),
                "session fetch failed, redirecting to login"
            );
            let location = login_location(&state.login_path, &original_uri);
            return Err(AppError::login_redirect(location));
        }
    };

    // 要件側が course を固定しない場合は request path から active course を解決する
    let active_course = course_from_path(original_uri.path());

    if evaluate(&session, &rules, active_course, state.missing_course) == AccessDecision::Denied {
        return Err(AppError::access_denied());
    }

    req.extensions_mut().insert(SessionCtx::new(session));
    Ok(next.run(req).await)
}

/// `/login?url=<encoded path+query>` — the return target after re-auth.
fn login_location(login_path: &str, original_uri: &Uri) -> String {
    let target = original_uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{login_path}?url={encoded}")
}

/// Active course = the path segment right after `courses`, if numeric.
fn course_from_path(path: &str) -> Option<CourseId> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "courses" {
            return segments.next()?.parse().ok();
        }
    }
    None
}
