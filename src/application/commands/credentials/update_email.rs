use super::CredentialService;
use crate::application::{dto::AuthenticatedSubject, error::ApplicationResult};
use crate::domain::account::{CredentialKind, CredentialPayload, EmailAddress};

pub struct UpdateEmailCommand {
    pub email: String,
    pub token: String,
}

impl CredentialService {
    /// Swap the account email. The new address starts out unconfirmed.
    pub async fn update_email(
        &self,
        actor: &AuthenticatedSubject,
        command: UpdateEmailCommand,
    ) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;

        self.verify_pending(actor, CredentialKind::EmailUpdate, &command.token)
            .await?;

        self.redeem(actor, &command.token, CredentialPayload::Email(email))
            .await
    }
}
