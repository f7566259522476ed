use super::poisoned;
use crate::domain::account::OAuthSessionRepository;
use crate::domain::authorization::Subject;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryOAuthSessionRepository {
    // token -> owning subject
    inner: Mutex<HashMap<String, Subject>>,
}

impl InMemoryOAuthSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, subject: Subject, token: impl Into<String>) -> DomainResult<()> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        guard.insert(token.into(), subject);
        Ok(())
    }

    pub fn contains(&self, token: &str) -> DomainResult<bool> {
        let guard = self.inner.lock().map_err(poisoned)?;
        Ok(guard.contains_key(token))
    }
}

#[async_trait]
impl OAuthSessionRepository for InMemoryOAuthSessionRepository {
    async fn revoke(&self, subject: &Subject, token: &str) -> DomainResult<bool> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        if guard.get(token) != Some(subject) {
            return Ok(false);
        }
        Ok(guard.remove(token).is_some())
    }
}
