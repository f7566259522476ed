// src/domain/account/entity.rs
use crate::domain::account::{
    credential::{CredentialKind, PendingCredential},
    value_objects::{EmailAddress, PasswordHash},
};
use crate::domain::authorization::Subject;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub subject: Subject,
    pub handle: String,
    pub email: EmailAddress,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub password_hash: PasswordHash,
    pub password_reset: PendingCredential,
    pub email_update: PendingCredential,
}

impl Account {
    pub fn pending(&self, kind: CredentialKind) -> &PendingCredential {
        match kind {
            CredentialKind::PasswordReset => &self.password_reset,
            CredentialKind::EmailUpdate => &self.email_update,
        }
    }
}
