use super::{AuthorizationService, ResponseMode};
use crate::application::{
    dto::{AuthenticatedSubject, RedirectTarget},
    error::ApplicationResult,
};
use crate::domain::authorization::{
    AcceptedAuthorization, AuthorizationDecision, AuthorizationError,
};

pub struct ResolveAuthorizationCommand {
    pub request_uri: String,
    pub decision: AuthorizationDecision,
}

impl AuthorizationService {
    /// Apply the subject's decision and return where to send the user agent.
    pub async fn resolve(
        &self,
        actor: &AuthenticatedSubject,
        command: ResolveAuthorizationCommand,
    ) -> ApplicationResult<RedirectTarget> {
        let loaded = self.load_request(&command.request_uri, None).await?;

        match command.decision {
            AuthorizationDecision::Reject => {
                tracing::info!(
                    request_id = %loaded.request.request_id,
                    client_id = %loaded.request.client_id,
                    "authorization request rejected"
                );
                self.redirects.rejected(&loaded.client.client_uri)
            }
            AuthorizationDecision::Accept => {
                let request = loaded.request;
                request.ensure_acceptable(self.clock.now())?;
                let callback = self
                    .redirects
                    .callback(
                        &request.parameters.redirect_uri,
                        ResponseMode::for_client(&request.client_auth),
                    )
                    .inspect_err(|err| {
                        tracing::warn!(
                            request_id = %request.request_id,
                            client_id = %request.client_id,
                            error = %err,
                            "refusing to accept request with unusable redirect_uri"
                        );
                    })?;

                let code = self.code_issuer.issue()?;
                let applied = self
                    .request_repo
                    .accept(
                        &request.request_id,
                        AcceptedAuthorization {
                            subject: actor.subject.clone(),
                            code: code.clone(),
                        },
                    )
                    .await?;

                if !applied {
                    tracing::warn!(
                        request_id = %request.request_id,
                        "concurrent accept lost the race; no code issued"
                    );
                    return Err(AuthorizationError::AlreadyResolved.into());
                }

                tracing::info!(
                    request_id = %request.request_id,
                    client_id = %request.client_id,
                    subject = %actor.subject,
                    "authorization request accepted"
                );

                Ok(self
                    .redirects
                    .accepted(callback, &request.parameters.state, &code))
            }
        }
    }
}
