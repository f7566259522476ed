use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;
use support::{
    AccountBuilder, AuthorizationRequestBuilder, FailingClientDirectory, HarnessBuilder,
    TEST_TOKEN, assert_error_response, body_json, fixed_now, get, harness, post_form, post_json,
};

fn view_uri(request_uri: &str) -> String {
    let query = serde_urlencoded::to_string([("request_uri", request_uri)]).unwrap();
    format!("/oauth/authorize?{query}")
}

/// 存在しないリクエストは 404 Not Found を返す
#[tokio::test]
async fn e2e_unknown_request_returns_404() {
    let h = harness();

    let resp = h
        .router()
        .oneshot(get(
            &view_uri("urn:ietf:params:oauth:request_uri:req-ffff"),
            Some(TEST_TOKEN),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 形式不正なリクエスト URI は 400 Bad Request を返す
#[tokio::test]
async fn e2e_malformed_request_uri_returns_400() {
    let h = harness();

    let resp = h
        .router()
        .oneshot(get(&view_uri("req-ffff"), Some(TEST_TOKEN)))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 不正なセッショントークンは 401 Unauthorized を返す
#[tokio::test]
async fn e2e_invalid_session_token_returns_401() {
    let h = harness();

    let resp = h
        .router()
        .oneshot(get(
            &view_uri("urn:ietf:params:oauth:request_uri:req-ffff"),
            Some("bogus"),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// クライアントメタデータが取得できない場合は 502 Bad Gateway を返す
#[tokio::test]
async fn e2e_upstream_failure_returns_502() {
    let h = HarnessBuilder::new()
        .client_directory(Arc::new(FailingClientDirectory))
        .build();
    let builder = AuthorizationRequestBuilder::new();
    let request_uri = builder.request_uri();
    h.requests.insert(builder.build()).unwrap();

    let resp = h
        .router()
        .oneshot(get(&view_uri(&request_uri), Some(TEST_TOKEN)))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::BAD_GATEWAY, "Bad Gateway").await;
}

#[tokio::test]
async fn e2e_expired_request_accept_returns_400() {
    let h = harness();
    let builder =
        AuthorizationRequestBuilder::new().expires_at(fixed_now() - Duration::seconds(1));
    let request_uri = builder.request_uri();
    h.requests.insert(builder.build()).unwrap();

    let resp = h
        .router()
        .oneshot(post_form(
            "/oauth/authorize",
            Some(TEST_TOKEN),
            &[
                ("request_uri", request_uri.as_str()),
                ("accept_or_reject", "accept"),
            ],
        ))
        .await
        .unwrap();

    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(message.contains("expired"));
}

/// パスワードリセット: 誤ったトークンは InvalidToken、正しいトークンは 200
#[tokio::test]
async fn e2e_reset_password_flow() {
    let h = harness();
    h.accounts
        .insert(
            AccountBuilder::new()
                .password_reset("reset-123", fixed_now() + Duration::minutes(15))
                .build(),
        )
        .unwrap();

    let resp = h
        .router()
        .oneshot(post_json(
            "/api/v1/account/reset-password",
            Some(TEST_TOKEN),
            json!({ "token": "wrong", "password": "new-password" }),
        ))
        .await
        .unwrap();
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(message, "InvalidToken");

    let resp = h
        .router()
        .oneshot(post_json(
            "/api/v1/account/reset-password",
            Some(TEST_TOKEN),
            json!({ "token": "reset-123", "password": "new-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn e2e_update_email_expired_token() {
    let h = harness();
    h.accounts
        .insert(
            AccountBuilder::new()
                .email_update("email-abc", fixed_now() - Duration::seconds(1))
                .build(),
        )
        .unwrap();

    let resp = h
        .router()
        .oneshot(post_json(
            "/api/v1/account/update-email",
            Some(TEST_TOKEN),
            json!({ "email": "alice@new.example", "token": "email-abc" }),
        ))
        .await
        .unwrap();

    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(message, "ExpiredToken");
}

#[tokio::test]
async fn e2e_account_endpoints_require_session() {
    let h = harness();

    let resp = h
        .router()
        .oneshot(post_form("/api/v1/account/revoke", None, &[("token", "tok")]))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn e2e_revoke_session() {
    let h = harness();
    h.sessions
        .insert(support::actor().subject, "tok-own")
        .unwrap();

    let resp = h
        .router()
        .oneshot(post_form(
            "/api/v1/account/revoke",
            Some(TEST_TOKEN),
            &[("token", "tok-own")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = h
        .router()
        .oneshot(post_form(
            "/api/v1/account/revoke",
            Some(TEST_TOKEN),
            &[("token", "tok-own")],
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_health_and_openapi() {
    let h = harness();

    let resp = h.router().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");

    let resp = h.router().oneshot(get("/openapi.json", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"].get("/oauth/authorize").is_some());
}
