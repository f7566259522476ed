// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;

use consent_core::application::{
    dto::AuthenticatedSubject,
    ports::{client_directory::ClientDirectory, security::CodeIssuer},
    services::{ApplicationServices, ServiceDependencies},
};
use consent_core::domain::authorization::Subject;
use consent_core::infrastructure::{
    memory::{
        InMemoryAccountRepository, InMemoryAuthorizationRequestRepository,
        InMemoryClientDirectory, InMemoryOAuthSessionRepository, InMemorySessionAuthenticator,
    },
    time::ManualClock,
};
use consent_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{HANDLE, ISSUER, SUBJECT, client_metadata};
use super::mocks::{DummyPasswordHasher, SequencedCodeIssuer, fixed_now};

pub const TEST_TOKEN: &str = "test-token";

pub fn actor() -> AuthenticatedSubject {
    AuthenticatedSubject {
        subject: Subject::new(SUBJECT).unwrap(),
        handle: HANDLE.into(),
    }
}

/// インメモリアダプタで組み立てたアプリケーション一式
pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub requests: Arc<InMemoryAuthorizationRequestRepository>,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub sessions: Arc<InMemoryOAuthSessionRepository>,
    pub clock: Arc<ManualClock>,
}

pub struct HarnessBuilder {
    client_directory: Arc<dyn ClientDirectory>,
    code_issuer: Arc<dyn CodeIssuer>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            client_directory: Arc::new(InMemoryClientDirectory::new().with_client(client_metadata())),
            code_issuer: Arc::new(SequencedCodeIssuer::default()),
        }
    }

    pub fn client_directory(mut self, directory: Arc<dyn ClientDirectory>) -> Self {
        self.client_directory = directory;
        self
    }

    pub fn code_issuer(mut self, issuer: Arc<dyn CodeIssuer>) -> Self {
        self.code_issuer = issuer;
        self
    }

    pub fn build(self) -> TestHarness {
        let requests = Arc::new(InMemoryAuthorizationRequestRepository::new());
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let sessions = Arc::new(InMemoryOAuthSessionRepository::new());
        let clock = Arc::new(ManualClock::new(fixed_now()));

        let authenticator = InMemorySessionAuthenticator::new();
        authenticator.insert(TEST_TOKEN, actor()).unwrap();

        let services = Arc::new(ApplicationServices::new(
            ServiceDependencies {
                request_repo: requests.clone(),
                account_repo: accounts.clone(),
                session_repo: sessions.clone(),
                client_directory: self.client_directory,
                code_issuer: self.code_issuer,
                password_hasher: Arc::new(DummyPasswordHasher),
                session_authenticator: Arc::new(authenticator),
                clock: clock.clone(),
            },
            ISSUER,
        ));

        TestHarness {
            services,
            requests,
            accounts,
            sessions,
            clock,
        }
    }
}

pub fn harness() -> TestHarness {
    HarnessBuilder::new().build()
}

impl TestHarness {
    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
            allowed_origins: vec!["http://localhost:3000".to_string()].into(),
        })
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, token: Option<&str>, form: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(form).unwrap();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, json: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(json.to_string())).unwrap()
}

pub fn location(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
