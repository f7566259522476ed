// src/domain/account/repository.rs
use crate::domain::account::{credential::CredentialPayload, entity::Account};
use crate::domain::authorization::Subject;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_subject(&self, subject: &Subject) -> DomainResult<Option<Account>>;

    /// Clear the pending credential of `payload.kind()` and apply `payload` in one
    /// conditional write, guarded on the stored code still being `code` and not
    /// having expired at `now`.
    ///
    /// Returns `false` if no row matched, i.e. the credential was already
    /// redeemed or replaced.
    async fn redeem_credential(
        &self,
        subject: &Subject,
        code: &str,
        now: DateTime<Utc>,
        payload: CredentialPayload,
    ) -> DomainResult<bool>;
}

#[async_trait]
pub trait OAuthSessionRepository: Send + Sync {
    /// Delete the session identified by `token` if it belongs to `subject`.
    async fn revoke(&self, subject: &Subject, token: &str) -> DomainResult<bool>;
}
