// src/infrastructure/repositories/accounts.rs
use super::map_sqlx;
use crate::domain::account::{
    Account, AccountRepository, CredentialPayload, EmailAddress, PasswordHash, PendingCredential,
};
use crate::domain::authorization::Subject;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    did: String,
    handle: String,
    email: String,
    email_confirmed_at: Option<DateTime<Utc>>,
    password: String,
    password_reset_code: Option<String>,
    password_reset_code_expires_at: Option<DateTime<Utc>>,
    email_update_code: Option<String>,
    email_update_code_expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            subject: Subject::new(row.did)?,
            handle: row.handle,
            email: EmailAddress::new(row.email)?,
            email_confirmed_at: row.email_confirmed_at,
            password_hash: PasswordHash::new(row.password)?,
            password_reset: PendingCredential {
                code: row.password_reset_code,
                expires_at: row.password_reset_code_expires_at,
            },
            email_update: PendingCredential {
                code: row.email_update_code,
                expires_at: row.email_update_code_expires_at,
            },
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_subject(&self, subject: &Subject) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT did, handle, email, email_confirmed_at, password,
                    password_reset_code, password_reset_code_expires_at,
                    email_update_code, email_update_code_expires_at
             FROM accounts WHERE did = $1",
        )
        .bind(subject.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn redeem_credential(
        &self,
        subject: &Subject,
        code: &str,
        now: DateTime<Utc>,
        payload: CredentialPayload,
    ) -> DomainResult<bool> {
        let query = match &payload {
            CredentialPayload::PasswordHash(hash) => sqlx::query(
                "UPDATE accounts
                 SET password_reset_code = NULL,
                     password_reset_code_expires_at = NULL,
                     password = $1
                 WHERE did = $2
                   AND password_reset_code = $3
                   AND password_reset_code_expires_at >= $4",
            )
            .bind(hash.as_str()),
            CredentialPayload::Email(email) => sqlx::query(
                "UPDATE accounts
                 SET email_update_code = NULL,
                     email_update_code_expires_at = NULL,
                     email_confirmed_at = NULL,
                     email = $1
                 WHERE did = $2
                   AND email_update_code = $3
                   AND email_update_code_expires_at >= $4",
            )
            .bind(email.as_str()),
        };

        let result = query
            .bind(subject.as_str())
            .bind(code)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() == 1)
    }
}
