use std::sync::Arc;

use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::domain::account::{AccountRepository, OAuthSessionRepository};

/// Redeems single-use secrets presented by an authenticated account holder.
pub struct CredentialService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) session_repo: Arc<dyn OAuthSessionRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CredentialService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        session_repo: Arc<dyn OAuthSessionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            session_repo,
            password_hasher,
            clock,
        }
    }
}
