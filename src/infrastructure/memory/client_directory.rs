use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::client_directory::{ClientDirectory, ClientMetadata},
};
use crate::domain::authorization::ClientId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Client registry held in memory. An unknown client is an upstream failure,
/// mirroring a metadata document that cannot be fetched.
#[derive(Default)]
pub struct InMemoryClientDirectory {
    clients: RwLock<HashMap<ClientId, ClientMetadata>>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(self, client: ClientMetadata) -> Self {
        self.register(client);
        self
    }

    pub fn register(&self, client: ClientMetadata) {
        let mut guard = self
            .clients
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.insert(client.client_id.clone(), client);
    }
}

#[async_trait]
impl ClientDirectory for InMemoryClientDirectory {
    async fn resolve(&self, client_id: &ClientId) -> ApplicationResult<ClientMetadata> {
        let guard = self
            .clients
            .read()
            .map_err(|_| ApplicationError::upstream("client directory lock poisoned"))?;
        guard
            .get(client_id)
            .cloned()
            .ok_or_else(|| ApplicationError::upstream(format!("unknown client {client_id}")))
    }
}
