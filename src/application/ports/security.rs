// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedSubject};
use crate::domain::authorization::AuthorizationCode;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}

/// Source of fresh authorization codes.
///
/// Implementations rely on entropy alone for uniqueness; nothing is checked
/// against the store.
pub trait CodeIssuer: Send + Sync {
    fn issue(&self) -> ApplicationResult<AuthorizationCode>;
}

#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    /// Resolve a presented session token to the subject it belongs to.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedSubject>;
}
