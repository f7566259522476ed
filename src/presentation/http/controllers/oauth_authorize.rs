// src/presentation/http/controllers/oauth_authorize.rs
use crate::application::{
    commands::authorization::{PrepareAuthorizationQuery, ResolveAuthorizationCommand},
    dto::AuthorizationViewDto,
    error::ApplicationError,
};
use crate::domain::authorization::AuthorizationDecision;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::{Query, RawQuery},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const SIGN_IN_PATH: &str = "/account/signin";

#[derive(Debug, Deserialize, IntoParams)]
pub struct AuthorizeParams {
    /// `urn:ietf:params:oauth:request_uri:req-<id>` handed out by the PAR endpoint.
    pub request_uri: Option<String>,
    pub client_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorizeDecisionForm {
    pub request_uri: String,
    /// Either `accept` or `reject`.
    pub accept_or_reject: String,
}

fn see_other(target: &str) -> HttpResult<Response> {
    let location = HeaderValue::from_str(target).map_err(|_| {
        HttpError::from_error(ApplicationError::infrastructure(
            "redirect target is not a valid header value",
        ))
    })?;
    Ok((StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response())
}

fn sign_in_redirect(raw_query: Option<String>) -> Response {
    let target = match raw_query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{SIGN_IN_PATH}?{query}"),
        None => SIGN_IN_PATH.to_string(),
    };
    Redirect::to(&target).into_response()
}

#[utoipa::path(
    get,
    path = "/oauth/authorize",
    params(AuthorizeParams),
    responses(
        (status = 200, description = "Consent view for the pending request.", body = AuthorizationViewDto),
        (status = 303, description = "Not signed in; redirected to the sign-in page."),
        (status = 400, description = "Malformed, expired or mismatched request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Client metadata could not be resolved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "OAuth"
)]
pub async fn authorize_view(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<AuthorizeParams>,
) -> HttpResult<Response> {
    let Some(actor) = actor.0 else {
        return Ok(sign_in_redirect(raw_query));
    };

    let request_uri = params.request_uri.ok_or_else(|| {
        HttpError::from_error(ApplicationError::validation("request_uri is required"))
    })?;

    let view = state
        .services
        .authorization
        .prepare_view(
            &actor,
            PrepareAuthorizationQuery {
                request_uri,
                client_id: params.client_id,
            },
        )
        .await
        .into_http()?;

    Ok(Json(view).into_response())
}

#[utoipa::path(
    post,
    path = "/oauth/authorize",
    request_body(content = AuthorizeDecisionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the client (accept) or its home page (reject), or to sign-in."),
        (status = 400, description = "Malformed, expired or already resolved request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Client metadata could not be resolved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "OAuth"
)]
pub async fn authorize_decision(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Form(form): Form<AuthorizeDecisionForm>,
) -> HttpResult<Response> {
    let Some(actor) = actor.0 else {
        return Ok(sign_in_redirect(None));
    };

    let decision = form
        .accept_or_reject
        .parse::<AuthorizationDecision>()
        .map_err(|err| HttpError::from_error(err.into()))?;

    let target = state
        .services
        .authorization
        .resolve(
            &actor,
            ResolveAuthorizationCommand {
                request_uri: form.request_uri,
                decision,
            },
        )
        .await
        .into_http()?;

    see_other(target.as_str())
}
