// src/infrastructure/repositories/oauth_sessions.rs
use super::map_sqlx;
use crate::domain::account::OAuthSessionRepository;
use crate::domain::authorization::Subject;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresOAuthSessionRepository {
    pool: PgPool,
}

impl PostgresOAuthSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OAuthSessionRepository for PostgresOAuthSessionRepository {
    async fn revoke(&self, subject: &Subject, token: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM oauth_tokens WHERE sub = $1 AND token = $2")
            .bind(subject.as_str())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
