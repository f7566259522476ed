use super::AuthorizationService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::client_directory::ClientMetadata,
};
use crate::domain::authorization::{
    AuthorizationError, AuthorizationRequest, ClientId, RequestUriCodec,
};

/// A stored request together with the metadata of the client that pushed it.
pub(super) struct LoadedRequest {
    pub request: AuthorizationRequest,
    pub client: ClientMetadata,
}

impl AuthorizationService {
    /// Decode the request URI, load the request, cross-check the caller's client
    /// id and resolve client metadata. Shared by every handshake step.
    pub(super) async fn load_request(
        &self,
        request_uri: &str,
        supplied_client_id: Option<&ClientId>,
    ) -> ApplicationResult<LoadedRequest> {
        let request_id =
            RequestUriCodec::decode(request_uri).map_err(AuthorizationError::from)?;

        let request = self
            .request_repo
            .find_by_id(&request_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("authorization request not found"))?;

        if let Err(err) = request.ensure_client(supplied_client_id) {
            tracing::warn!(
                request_id = %request.request_id,
                stored_client_id = %request.client_id,
                supplied_client_id = supplied_client_id.map(ClientId::as_str).unwrap_or_default(),
                "client id mismatch on authorization request"
            );
            return Err(err.into());
        }

        let client = self.client_directory.resolve(&request.client_id).await?;

        Ok(LoadedRequest { request, client })
    }
}
