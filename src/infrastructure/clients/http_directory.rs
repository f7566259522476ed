// src/infrastructure/clients/http_directory.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::client_directory::{ClientDirectory, ClientMetadata},
};
use crate::domain::authorization::ClientId;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Resolves clients by fetching the metadata document published at the
/// `client_id` URL.
#[derive(Clone)]
pub struct HttpClientDirectory {
    http: reqwest::Client,
}

impl HttpClientDirectory {
    pub fn new(timeout: Duration) -> ApplicationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { http })
    }
}

#[derive(Debug, Deserialize)]
struct ClientMetadataDocument {
    client_id: String,
    #[serde(default)]
    client_name: Option<String>,
    #[serde(default)]
    client_uri: Option<String>,
    #[serde(default)]
    redirect_uris: Vec<String>,
}

impl ClientMetadataDocument {
    fn into_metadata(self, requested: &ClientId) -> ApplicationResult<ClientMetadata> {
        if self.client_id != requested.as_str() {
            return Err(ApplicationError::upstream(format!(
                "metadata document for {requested} declares client_id {}",
                self.client_id
            )));
        }

        let client_uri = self
            .client_uri
            .or_else(|| self.redirect_uris.first().cloned())
            .ok_or_else(|| {
                ApplicationError::upstream(format!("client {requested} declares no client_uri"))
            })?;

        Ok(ClientMetadata {
            client_id: requested.clone(),
            client_name: self.client_name.unwrap_or_else(|| requested.to_string()),
            client_uri,
        })
    }
}

#[async_trait]
impl ClientDirectory for HttpClientDirectory {
    async fn resolve(&self, client_id: &ClientId) -> ApplicationResult<ClientMetadata> {
        if !client_id.as_str().starts_with("https://") {
            return Err(ApplicationError::upstream(format!(
                "client id {client_id} is not an https url"
            )));
        }

        let document = self
            .http
            .get(client_id.as_str())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                tracing::error!(client_id = %client_id, error = %err, "client metadata fetch failed");
                ApplicationError::upstream(err.to_string())
            })?
            .json::<ClientMetadataDocument>()
            .await
            .map_err(|err| ApplicationError::upstream(err.to_string()))?;

        document.into_metadata(client_id)
    }
}
