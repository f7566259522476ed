// src/domain/authorization/repository.rs
use crate::domain::authorization::{
    entity::{AcceptedAuthorization, AuthorizationRequest},
    value_objects::{AuthorizationCode, RequestId},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Outcome of presenting an authorization code.
#[derive(Debug)]
pub enum CodeRedemption {
    Redeemed(AuthorizationRequest),
    /// The code exists but was issued to another client. It stays redeemable.
    WrongClient,
    Unknown,
}

#[async_trait]
pub trait AuthorizationRequestRepository: Send + Sync {
    async fn find_by_id(&self, id: &RequestId) -> DomainResult<Option<AuthorizationRequest>>;

    /// Record the approval if, and only if, the request is still unaccepted.
    ///
    /// The check and the write are a single conditional update. Returns `false`
    /// when the precondition no longer holds (another accept already won).
    async fn accept(&self, id: &RequestId, accepted: AcceptedAuthorization) -> DomainResult<bool>;

    /// Atomically remove the accepted request that holds `code`, provided it
    /// was issued to `client_id`.
    async fn consume_code(
        &self,
        code: &AuthorizationCode,
        client_id: &str,
    ) -> DomainResult<CodeRedemption>;
}
