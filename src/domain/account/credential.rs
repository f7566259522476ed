// src/domain/account/credential.rs
use crate::domain::account::value_objects::{EmailAddress, PasswordHash};
use crate::domain::secret::constant_time_eq;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("no pending credential")]
    NoPendingCredential,
    #[error("token does not match")]
    TokenMismatch,
    #[error("token has expired")]
    TokenExpired,
}

impl CredentialError {
    /// Wire code reported to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            CredentialError::NoPendingCredential | CredentialError::TokenMismatch => {
                "InvalidToken"
            }
            CredentialError::TokenExpired => "ExpiredToken",
        }
    }
}

/// A time-bound, single-use secret issued to an account (reset or change code).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCredential {
    pub code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl PendingCredential {
    pub fn issued(code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: Some(code.into()),
            expires_at: Some(expires_at),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.code.is_some() && self.expires_at.is_some()
    }

    /// Check `supplied` against the stored secret at `now`.
    ///
    /// Never mutates anything; clearing happens in the same write that applies
    /// the payload.
    pub fn verify(&self, supplied: &str, now: DateTime<Utc>) -> Result<(), CredentialError> {
        let (Some(code), Some(expires_at)) = (self.code.as_deref(), self.expires_at) else {
            return Err(CredentialError::NoPendingCredential);
        };

        if !constant_time_eq(code, supplied) {
            return Err(CredentialError::TokenMismatch);
        }

        if now > expires_at {
            return Err(CredentialError::TokenExpired);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    PasswordReset,
    EmailUpdate,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::PasswordReset => "password_reset",
            CredentialKind::EmailUpdate => "email_update",
        }
    }
}

/// What gets applied once a credential has been redeemed.
#[derive(Debug, Clone)]
pub enum CredentialPayload {
    PasswordHash(PasswordHash),
    Email(EmailAddress),
}

impl CredentialPayload {
    pub fn kind(&self) -> CredentialKind {
        match self {
            CredentialPayload::PasswordHash(_) => CredentialKind::PasswordReset,
            CredentialPayload::Email(_) => CredentialKind::EmailUpdate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn unset_fields_mean_nothing_pending() {
        let now = Utc::now();
        let empty = PendingCredential::default();
        assert_eq!(empty.verify("abc", now), Err(CredentialError::NoPendingCredential));

        let code_only = PendingCredential {
            code: Some("abc".into()),
            expires_at: None,
        };
        assert_eq!(code_only.verify("abc", now), Err(CredentialError::NoPendingCredential));

        let expiry_only = PendingCredential {
            code: None,
            expires_at: Some(now + Duration::minutes(5)),
        };
        assert_eq!(expiry_only.verify("abc", now), Err(CredentialError::NoPendingCredential));
    }

    #[test]
    fn mismatch_is_reported_before_expiry() {
        let now = Utc::now();
        let stale = PendingCredential::issued("abc", now - Duration::minutes(1));
        assert_eq!(stale.verify("abd", now), Err(CredentialError::TokenMismatch));
        assert_eq!(stale.verify("ab", now), Err(CredentialError::TokenMismatch));
        assert_eq!(stale.verify("abc", now), Err(CredentialError::TokenExpired));
    }

    #[test]
    fn matching_unexpired_token_passes() {
        let now = Utc::now();
        let pending = PendingCredential::issued("abc", now);
        assert!(pending.verify("abc", now).is_ok());
    }

    #[test]
    fn wire_codes_collapse_missing_and_mismatch() {
        assert_eq!(CredentialError::NoPendingCredential.code(), "InvalidToken");
        assert_eq!(CredentialError::TokenMismatch.code(), "InvalidToken");
        assert_eq!(CredentialError::TokenExpired.code(), "ExpiredToken");
    }
}
