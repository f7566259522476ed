// src/infrastructure/security/session_authenticator.rs
use crate::application::{
    dto::AuthenticatedSubject,
    error::{ApplicationError, ApplicationResult},
    ports::{security::SessionAuthenticator, time::Clock},
};
use crate::domain::authorization::Subject;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

/// Only digests of session tokens are stored; this maps a presented token to
/// its lookup key.
pub fn session_token_digest(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

#[derive(Clone)]
pub struct PostgresSessionAuthenticator {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl PostgresSessionAuthenticator {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct SessionSubjectRow {
    did: String,
    handle: String,
}

#[async_trait]
impl SessionAuthenticator for PostgresSessionAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedSubject> {
        let row = sqlx::query_as::<_, SessionSubjectRow>(
            "SELECT a.did, a.handle
             FROM account_sessions s
             JOIN accounts a ON a.did = s.did
             WHERE s.token_hash = $1 AND s.expires_at >= $2",
        )
        .bind(session_token_digest(token))
        .bind(self.clock.now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .ok_or_else(|| ApplicationError::unauthorized("invalid or expired session"))?;

        Ok(AuthenticatedSubject {
            subject: Subject::new(row.did)?,
            handle: row.handle,
        })
    }
}
