// src/infrastructure/repositories/authorization_requests.rs
use super::map_sqlx;
use crate::domain::authorization::{
    AcceptedAuthorization, AuthorizationCode, AuthorizationParameters, AuthorizationRequest,
    AuthorizationRequestRepository, ClientAuthMethod, ClientId, CodeRedemption, RequestId, Subject,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool, types::Json};

const SELECT_COLUMNS: &str =
    "request_id, client_id, client_auth, parameters, expires_at, sub, code, accepted";

#[derive(Clone)]
pub struct PostgresAuthorizationRequestRepository {
    pool: PgPool,
}

impl PostgresAuthorizationRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Deserialize)]
struct ClientAuthDocument {
    method: ClientAuthMethod,
}

#[derive(Debug, FromRow)]
struct AuthorizationRequestRow {
    request_id: String,
    client_id: String,
    client_auth: Json<ClientAuthDocument>,
    parameters: Json<AuthorizationParameters>,
    expires_at: DateTime<Utc>,
    sub: Option<String>,
    code: Option<String>,
    accepted: bool,
}

impl TryFrom<AuthorizationRequestRow> for AuthorizationRequest {
    type Error = DomainError;

    fn try_from(row: AuthorizationRequestRow) -> Result<Self, Self::Error> {
        Ok(AuthorizationRequest {
            request_id: RequestId::new(row.request_id)?,
            client_id: ClientId::new(row.client_id)?,
            parameters: row.parameters.0,
            client_auth: row.client_auth.0.method,
            subject: row.sub.map(Subject::new).transpose()?,
            code: row.code.map(AuthorizationCode::new).transpose()?,
            accepted: row.accepted,
            expires_at: row.expires_at,
        })
    }
}

#[async_trait]
impl AuthorizationRequestRepository for PostgresAuthorizationRequestRepository {
    async fn find_by_id(&self, id: &RequestId) -> DomainResult<Option<AuthorizationRequest>> {
        let row = sqlx::query_as::<_, AuthorizationRequestRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM oauth_authorization_requests WHERE request_id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(AuthorizationRequest::try_from).transpose()
    }

    async fn accept(&self, id: &RequestId, accepted: AcceptedAuthorization) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE oauth_authorization_requests
             SET sub = $1, code = $2, accepted = TRUE
             WHERE request_id = $3 AND accepted = FALSE AND sub IS NULL AND code IS NULL",
        )
        .bind(accepted.subject.as_str())
        .bind(accepted.code.as_str())
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() == 1)
    }

    async fn consume_code(
        &self,
        code: &AuthorizationCode,
        client_id: &str,
    ) -> DomainResult<CodeRedemption> {
        let row = sqlx::query_as::<_, AuthorizationRequestRow>(&format!(
            "DELETE FROM oauth_authorization_requests
             WHERE code = $1 AND client_id = $2 AND accepted = TRUE
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(code.as_str())
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = row {
            return Ok(CodeRedemption::Redeemed(AuthorizationRequest::try_from(row)?));
        }

        let held_elsewhere: bool = sqlx::query_scalar(
            "SELECT EXISTS(
                 SELECT 1 FROM oauth_authorization_requests
                 WHERE code = $1 AND accepted = TRUE
             )",
        )
        .bind(code.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(if held_elsewhere {
            CodeRedemption::WrongClient
        } else {
            CodeRedemption::Unknown
        })
    }
}
