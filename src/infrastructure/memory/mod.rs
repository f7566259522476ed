// src/infrastructure/memory/mod.rs
//! Mutex-backed adapters for local development and tests. Every conditional
//! update holds the lock across its check and its write.
mod accounts;
mod authorization_requests;
mod client_directory;
mod oauth_sessions;
mod sessions;

pub use accounts::InMemoryAccountRepository;
pub use authorization_requests::InMemoryAuthorizationRequestRepository;
pub use client_directory::InMemoryClientDirectory;
pub use oauth_sessions::InMemoryOAuthSessionRepository;
pub use sessions::InMemorySessionAuthenticator;

use crate::domain::errors::DomainError;
use std::sync::PoisonError;

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::persistence("in-memory store lock poisoned")
}
