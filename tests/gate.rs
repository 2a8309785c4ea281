//! End-to-end gate behavior against the real v1 router, with the session
//! backend stubbed out.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use session_gate::api;
use session_gate::domain::access::MissingCoursePolicy;
use session_gate::domain::session::{CourseId, CourseMembership, CourseRole, Session};
use session_gate::services::session::{
    SessionClient, SessionClientError, SessionStore, client::SessionResult,
};
use session_gate::state::AppState;

/// Serves a fixed session; fails the first `failures` fetches.
#[derive(Debug)]
struct StubBackend {
    session: Session,
    calls: AtomicUsize,
    failures: AtomicUsize,
}

impl StubBackend {
    fn new(session: Session) -> Arc<Self> {
        Self::failing(session, 0)
    }

    fn failing(session: Session, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            session,
            calls: AtomicUsize::new(0),
            failures: AtomicUsize::new(failures),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionClient for StubBackend {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn fetch(&self) -> SessionResult<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SessionClientError::Connection("stub down".into()));
        }
        Ok(self.session.clone())
    }
}

fn session(admin: bool, hirer: bool, memberships: &[(CourseId, &[CourseRole])]) -> Session {
    let mut courses = HashMap::new();
    for (id, roles) in memberships {
        courses.insert(
            *id,
            CourseMembership {
                roles: roles.to_vec(),
            },
        );
    }
    Session {
        is_admin: admin,
        is_hirer: hirer,
        courses,
    }
}

fn app(backend: Arc<StubBackend>) -> Router {
    let state = AppState::new(
        SessionStore::new(backend),
        "/login",
        MissingCoursePolicy::Allow,
    );
    Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state)
}

async fn get(app: &Router, path: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn health_never_touches_the_session_backend() {
    let backend = StubBackend::new(session(false, false, &[]));
    let app = app(backend.clone());

    let res = get(&app, "/api/v1/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn session_is_fetched_once_across_requests() {
    let backend = StubBackend::new(session(false, false, &[]));
    let app = app(backend.clone());

    assert_eq!(get(&app, "/api/v1/me").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/api/v1/me").await.status(), StatusCode::OK);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn admin_route_denies_non_admin_and_admits_admin() {
    let plain = app(StubBackend::new(session(false, false, &[])));
    assert_eq!(
        get(&plain, "/api/v1/admin/stats").await.status(),
        StatusCode::FORBIDDEN
    );

    let admin = app(StubBackend::new(session(true, false, &[])));
    assert_eq!(
        get(&admin, "/api/v1/admin/stats").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn hirer_route_admits_hirers_and_admins_only() {
    let plain = app(StubBackend::new(session(false, false, &[])));
    assert_eq!(
        get(&plain, "/api/v1/hirer/candidates").await.status(),
        StatusCode::FORBIDDEN
    );

    let hirer = app(StubBackend::new(session(false, true, &[])));
    assert_eq!(
        get(&hirer, "/api/v1/hirer/candidates").await.status(),
        StatusCode::OK
    );

    let admin = app(StubBackend::new(session(true, false, &[])));
    assert_eq!(
        get(&admin, "/api/v1/hirer/candidates").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn course_roles_are_checked_against_the_course_in_the_path() {
    let mentor = app(StubBackend::new(session(
        false,
        false,
        &[(1, &[CourseRole::Mentor])],
    )));

    assert_eq!(
        get(&mentor, "/api/v1/courses/1/students").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        get(&mentor, "/api/v1/courses/2/students").await.status(),
        StatusCode::FORBIDDEN
    );

    let student = app(StubBackend::new(session(
        false,
        false,
        &[(1, &[CourseRole::Student])],
    )));
    assert_eq!(
        get(&student, "/api/v1/courses/1/students").await.status(),
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn power_user_route_admits_staff_of_other_courses() {
    let mentor_elsewhere = app(StubBackend::new(session(
        false,
        false,
        &[(1, &[CourseRole::Mentor])],
    )));

    // /students requires a role in the target course; /mentors also accepts
    // the same role held in any course.
    assert_eq!(
        get(&mentor_elsewhere, "/api/v1/courses/2/students")
            .await
            .status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        get(&mentor_elsewhere, "/api/v1/courses/2/mentors")
            .await
            .status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn fetch_failure_redirects_to_login_with_return_target() {
    let backend = StubBackend::failing(session(false, false, &[]), usize::MAX);
    let app = app(backend);

    let res = get(&app, "/api/v1/me").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "/login?url=%2Fapi%2Fv1%2Fme"
    );
}

#[tokio::test]
async fn failed_fetch_is_retried_on_the_next_request() {
    let backend = StubBackend::failing(session(false, false, &[]), 1);
    let app = app(backend.clone());

    assert_eq!(
        get(&app, "/api/v1/me").await.status(),
        StatusCode::SEE_OTHER
    );
    assert_eq!(get(&app, "/api/v1/me").await.status(), StatusCode::OK);
    assert_eq!(backend.calls(), 2);
}
