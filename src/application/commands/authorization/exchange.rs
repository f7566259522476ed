use super::AuthorizationService;
use crate::application::{
    dto::AuthorizationGrantDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::authorization::{AuthorizationCode, AuthorizationError, CodeRedemption};

pub struct ConsumeCodeCommand {
    pub code: String,
    pub client_id: String,
}

impl AuthorizationService {
    /// Redeem an issued code. The backing record is removed in the same step, so
    /// a code can be exchanged at most once. A code presented by another client
    /// is refused and left in place.
    pub async fn consume_code(
        &self,
        command: ConsumeCodeCommand,
    ) -> ApplicationResult<AuthorizationGrantDto> {
        let code = AuthorizationCode::new(command.code)?;

        let request = match self
            .request_repo
            .consume_code(&code, &command.client_id)
            .await?
        {
            CodeRedemption::Redeemed(request) => request,
            CodeRedemption::WrongClient => {
                tracing::warn!(
                    presented_by = %command.client_id,
                    "authorization code presented by a different client"
                );
                return Err(AuthorizationError::ClientMismatch.into());
            }
            CodeRedemption::Unknown => {
                return Err(ApplicationError::not_found("authorization code not found"));
            }
        };

        let subject = request
            .subject
            .ok_or_else(|| ApplicationError::infrastructure("accepted request has no subject"))?;

        Ok(AuthorizationGrantDto {
            subject: subject.to_string(),
            client_id: request.client_id.to_string(),
            scope: request.parameters.scope,
            redirect_uri: request.parameters.redirect_uri,
            expires_at: request.expires_at,
        })
    }
}
