use super::poisoned;
use crate::domain::authorization::{
    AcceptedAuthorization, AuthorizationCode, AuthorizationRequest, AuthorizationRequestRepository,
    CodeRedemption, RequestId,
};
use crate::domain::{errors::DomainResult, secret::constant_time_eq};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAuthorizationRequestRepository {
    // request id -> request
    inner: Mutex<HashMap<RequestId, AuthorizationRequest>>,
}

impl InMemoryAuthorizationRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a request as if it had been pushed upstream.
    pub fn insert(&self, request: AuthorizationRequest) -> DomainResult<()> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        guard.insert(request.request_id.clone(), request);
        Ok(())
    }

    pub fn get(&self, id: &RequestId) -> DomainResult<Option<AuthorizationRequest>> {
        let guard = self.inner.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }
}

#[async_trait]
impl AuthorizationRequestRepository for InMemoryAuthorizationRequestRepository {
    async fn find_by_id(&self, id: &RequestId) -> DomainResult<Option<AuthorizationRequest>> {
        self.get(id)
    }

    async fn accept(&self, id: &RequestId, accepted: AcceptedAuthorization) -> DomainResult<bool> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        let Some(request) = guard.get_mut(id) else {
            return Ok(false);
        };
        if request.is_resolved() {
            return Ok(false);
        }

        request.subject = Some(accepted.subject);
        request.code = Some(accepted.code);
        request.accepted = true;
        Ok(true)
    }

    async fn consume_code(
        &self,
        code: &AuthorizationCode,
        client_id: &str,
    ) -> DomainResult<CodeRedemption> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        let Some(request) = guard
            .values()
            .find(|request| request.accepted && request.code.as_ref() == Some(code))
        else {
            return Ok(CodeRedemption::Unknown);
        };
        if !constant_time_eq(request.client_id.as_str(), client_id) {
            return Ok(CodeRedemption::WrongClient);
        }

        let id = request.request_id.clone();
        Ok(guard
            .remove(&id)
            .map_or(CodeRedemption::Unknown, CodeRedemption::Redeemed))
    }
}
