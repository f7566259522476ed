use super::AuthorizationService;
use crate::application::{
    dto::{AuthenticatedSubject, AuthorizationViewDto},
    error::ApplicationResult,
};
use crate::domain::authorization::ClientId;

pub struct PrepareAuthorizationQuery {
    pub request_uri: String,
    /// Client id echoed by the caller, if any. Must match the stored one.
    pub client_id: Option<String>,
}

impl AuthorizationService {
    /// Build the consent view for a pending request. Read-only.
    pub async fn prepare_view(
        &self,
        actor: &AuthenticatedSubject,
        query: PrepareAuthorizationQuery,
    ) -> ApplicationResult<AuthorizationViewDto> {
        let supplied = query
            .client_id
            .filter(|id| !id.is_empty())
            .map(ClientId::new)
            .transpose()?;

        let loaded = self
            .load_request(&query.request_uri, supplied.as_ref())
            .await?;

        Ok(AuthorizationViewDto {
            scopes: loaded.request.parameters.scopes().into_vec(),
            client_name: loaded.client.client_name,
            request_uri: query.request_uri,
            handle: actor.handle.clone(),
        })
    }
}
