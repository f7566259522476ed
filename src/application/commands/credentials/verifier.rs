use super::CredentialService;
use crate::application::{
    dto::AuthenticatedSubject,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::account::{CredentialError, CredentialKind, CredentialPayload};

impl CredentialService {
    /// Check `token` against the subject's pending credential of `kind`.
    ///
    /// Failed checks leave the stored credential untouched, so a caller may retry
    /// with another token.
    pub(super) async fn verify_pending(
        &self,
        actor: &AuthenticatedSubject,
        kind: CredentialKind,
        token: &str,
    ) -> ApplicationResult<()> {
        let account = self
            .account_repo
            .find_by_subject(&actor.subject)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        if let Err(err) = account.pending(kind).verify(token, self.clock.now()) {
            tracing::warn!(
                subject = %actor.subject,
                kind = kind.as_str(),
                error = %err,
                "credential verification failed"
            );
            return Err(err.into());
        }

        Ok(())
    }

    /// Clear the credential and apply `payload` in one conditional write.
    pub(super) async fn redeem(
        &self,
        actor: &AuthenticatedSubject,
        token: &str,
        payload: CredentialPayload,
    ) -> ApplicationResult<()> {
        let kind = payload.kind();
        let applied = self
            .account_repo
            .redeem_credential(&actor.subject, token, self.clock.now(), payload)
            .await?;

        if !applied {
            // Someone redeemed or replaced the credential after we verified it.
            tracing::warn!(
                subject = %actor.subject,
                kind = kind.as_str(),
                "credential no longer pending at redemption"
            );
            return Err(CredentialError::NoPendingCredential.into());
        }

        tracing::info!(subject = %actor.subject, kind = kind.as_str(), "credential redeemed");
        Ok(())
    }
}
