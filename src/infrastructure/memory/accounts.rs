use super::poisoned;
use crate::domain::account::{Account, AccountRepository, CredentialKind, CredentialPayload};
use crate::domain::authorization::Subject;
use crate::domain::errors::DomainResult;
use crate::domain::secret::constant_time_eq;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    inner: Mutex<HashMap<Subject, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, account: Account) -> DomainResult<()> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        guard.insert(account.subject.clone(), account);
        Ok(())
    }

    pub fn get(&self, subject: &Subject) -> DomainResult<Option<Account>> {
        let guard = self.inner.lock().map_err(poisoned)?;
        Ok(guard.get(subject).cloned())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_subject(&self, subject: &Subject) -> DomainResult<Option<Account>> {
        self.get(subject)
    }

    async fn redeem_credential(
        &self,
        subject: &Subject,
        code: &str,
        now: DateTime<Utc>,
        payload: CredentialPayload,
    ) -> DomainResult<bool> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        let Some(account) = guard.get_mut(subject) else {
            return Ok(false);
        };

        let pending = match payload.kind() {
            CredentialKind::PasswordReset => &mut account.password_reset,
            CredentialKind::EmailUpdate => &mut account.email_update,
        };

        let still_pending = match (pending.code.as_deref(), pending.expires_at) {
            (Some(stored), Some(expires_at)) => constant_time_eq(stored, code) && now <= expires_at,
            _ => false,
        };
        if !still_pending {
            return Ok(false);
        }

        pending.code = None;
        pending.expires_at = None;

        match payload {
            CredentialPayload::PasswordHash(hash) => account.password_hash = hash,
            CredentialPayload::Email(email) => {
                account.email = email;
                account.email_confirmed_at = None;
            }
        }

        Ok(true)
    }
}
