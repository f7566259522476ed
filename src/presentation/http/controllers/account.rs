// src/presentation/http/controllers/account.rs
use crate::application::commands::credentials::{
    ResetPasswordCommand, RevokeSessionCommand, UpdateEmailCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmailRequest {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RevokeSessionForm {
    pub token: String,
}

fn ok() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/account/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced.", body = StatusResponse),
        (status = 400, description = "InvalidToken, ExpiredToken or an unacceptable password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .credentials
        .reset_password(
            &actor,
            ResetPasswordCommand {
                token: payload.token,
                password: payload.password,
            },
        )
        .await
        .into_http()
        .map(|_| ok())
}

#[utoipa::path(
    post,
    path = "/api/v1/account/update-email",
    request_body = UpdateEmailRequest,
    responses(
        (status = 200, description = "Email replaced; the new address is unconfirmed.", body = StatusResponse),
        (status = 400, description = "InvalidToken, ExpiredToken or a malformed address.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Address already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn update_email(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<UpdateEmailRequest>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .credentials
        .update_email(
            &actor,
            UpdateEmailCommand {
                email: payload.email,
                token: payload.token,
            },
        )
        .await
        .into_http()
        .map(|_| ok())
}

#[utoipa::path(
    post,
    path = "/api/v1/account/revoke",
    request_body(content = RevokeSessionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Session revoked.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No session of this account matches the token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Account"
)]
pub async fn revoke_session(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<RevokeSessionForm>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .credentials
        .revoke_session(&actor, RevokeSessionCommand { token: form.token })
        .await
        .into_http()
        .map(|_| ok())
}
