use super::{CredentialService, password::validate_password};
use crate::application::{dto::AuthenticatedSubject, error::ApplicationResult};
use crate::domain::account::{CredentialKind, CredentialPayload, PasswordHash};

pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

impl CredentialService {
    pub async fn reset_password(
        &self,
        actor: &AuthenticatedSubject,
        command: ResetPasswordCommand,
    ) -> ApplicationResult<()> {
        validate_password(&command.password)?;

        self.verify_pending(actor, CredentialKind::PasswordReset, &command.token)
            .await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        self.redeem(
            actor,
            &command.token,
            CredentialPayload::PasswordHash(password_hash),
        )
        .await
    }
}
