use super::poisoned;
use crate::application::{
    dto::AuthenticatedSubject,
    error::{ApplicationError, ApplicationResult},
    ports::security::SessionAuthenticator,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemorySessionAuthenticator {
    // bearer token -> subject
    sessions: Mutex<HashMap<String, AuthenticatedSubject>>,
}

impl InMemorySessionAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: impl Into<String>, subject: AuthenticatedSubject) -> DomainResult<()> {
        let mut guard = self.sessions.lock().map_err(poisoned)?;
        guard.insert(token.into(), subject);
        Ok(())
    }
}

#[async_trait]
impl SessionAuthenticator for InMemorySessionAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedSubject> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        guard
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid session token"))
    }
}
