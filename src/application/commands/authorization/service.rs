use std::sync::Arc;

use super::redirect::RedirectEncoder;
use crate::application::ports::{
    client_directory::ClientDirectory, security::CodeIssuer, time::Clock,
};
use crate::domain::authorization::AuthorizationRequestRepository;

/// Drives a pending authorization request to acceptance or rejection.
pub struct AuthorizationService {
    pub(super) request_repo: Arc<dyn AuthorizationRequestRepository>,
    pub(super) client_directory: Arc<dyn ClientDirectory>,
    pub(super) code_issuer: Arc<dyn CodeIssuer>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) redirects: RedirectEncoder,
}

impl AuthorizationService {
    pub fn new(
        request_repo: Arc<dyn AuthorizationRequestRepository>,
        client_directory: Arc<dyn ClientDirectory>,
        code_issuer: Arc<dyn CodeIssuer>,
        clock: Arc<dyn Clock>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            request_repo,
            client_directory,
            code_issuer,
            clock,
            redirects: RedirectEncoder::new(issuer),
        }
    }

    pub fn issuer(&self) -> &str {
        self.redirects.issuer()
    }
}
