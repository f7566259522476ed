// src/application/ports/client_directory.rs
use crate::application::ApplicationResult;
use crate::domain::authorization::ClientId;
use async_trait::async_trait;

/// Display and fallback data for a client. The response mode is not part of
/// it: that follows the authentication method recorded on the pushed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMetadata {
    pub client_id: ClientId,
    pub client_name: String,
    /// Base URI a declined request is sent back to.
    pub client_uri: String,
}

#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Resolve client metadata. Any failure to answer is reported as
    /// `ApplicationError::Upstream`, never as a missing record.
    async fn resolve(&self, client_id: &ClientId) -> ApplicationResult<ClientMetadata>;
}
