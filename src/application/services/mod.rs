// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{authorization::AuthorizationService, credentials::CredentialService},
        dto::AuthenticatedSubject,
        ports::{
            client_directory::ClientDirectory,
            security::{CodeIssuer, PasswordHasher, SessionAuthenticator},
            time::Clock,
        },
    },
    domain::{
        account::{AccountRepository, OAuthSessionRepository},
        authorization::AuthorizationRequestRepository,
    },
};

/// Collaborators the services are assembled from.
pub struct ServiceDependencies {
    pub request_repo: Arc<dyn AuthorizationRequestRepository>,
    pub account_repo: Arc<dyn AccountRepository>,
    pub session_repo: Arc<dyn OAuthSessionRepository>,
    pub client_directory: Arc<dyn ClientDirectory>,
    pub code_issuer: Arc<dyn CodeIssuer>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub session_authenticator: Arc<dyn SessionAuthenticator>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub authorization: Arc<AuthorizationService>,
    pub credentials: Arc<CredentialService>,
    session_authenticator: Arc<dyn SessionAuthenticator>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies, issuer: impl Into<String>) -> Self {
        let authorization = Arc::new(AuthorizationService::new(
            Arc::clone(&deps.request_repo),
            Arc::clone(&deps.client_directory),
            Arc::clone(&deps.code_issuer),
            Arc::clone(&deps.clock),
            issuer,
        ));

        let credentials = Arc::new(CredentialService::new(
            Arc::clone(&deps.account_repo),
            Arc::clone(&deps.session_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.clock),
        ));

        Self {
            authorization,
            credentials,
            session_authenticator: deps.session_authenticator,
        }
    }

    pub fn session_authenticator(&self) -> Arc<dyn SessionAuthenticator> {
        Arc::clone(&self.session_authenticator)
    }

    /// Resolve a raw bearer token to the subject it was issued to.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<AuthenticatedSubject> {
        self.session_authenticator.authenticate(token).await
    }
}
