use super::CredentialService;
use crate::application::{
    dto::AuthenticatedSubject,
    error::{ApplicationError, ApplicationResult},
};

pub struct RevokeSessionCommand {
    pub token: String,
}

impl CredentialService {
    /// Revoke one of the subject's own OAuth sessions. Locating and deleting the
    /// session is a single statement; a token owned by someone else is reported
    /// exactly like an unknown one.
    pub async fn revoke_session(
        &self,
        actor: &AuthenticatedSubject,
        command: RevokeSessionCommand,
    ) -> ApplicationResult<()> {
        if command.token.is_empty() {
            return Err(ApplicationError::validation("token is required"));
        }

        let deleted = self
            .session_repo
            .revoke(&actor.subject, &command.token)
            .await?;

        if !deleted {
            tracing::warn!(subject = %actor.subject, "session revocation matched nothing");
            return Err(ApplicationError::not_found("session not found"));
        }

        tracing::info!(subject = %actor.subject, "oauth session revoked");
        Ok(())
    }
}
