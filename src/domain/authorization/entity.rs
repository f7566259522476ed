// src/domain/authorization/entity.rs
use crate::domain::authorization::{
    errors::AuthorizationError,
    value_objects::{AuthorizationCode, ClientAuthMethod, ClientId, RequestId, ScopeSet, Subject},
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Protocol parameters supplied by the client when the request was pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationParameters {
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub state: String,
    pub redirect_uri: String,
}

impl AuthorizationParameters {
    pub fn scopes(&self) -> ScopeSet {
        ScopeSet::parse(&self.scope)
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub request_id: RequestId,
    pub client_id: ClientId,
    pub parameters: AuthorizationParameters,
    pub client_auth: ClientAuthMethod,
    pub subject: Option<Subject>,
    pub code: Option<AuthorizationCode>,
    pub accepted: bool,
    pub expires_at: DateTime<Utc>,
}

impl AuthorizationRequest {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_resolved(&self) -> bool {
        self.accepted || self.subject.is_some() || self.code.is_some()
    }

    /// Check the preconditions of the accept transition at `now`.
    pub fn ensure_acceptable(&self, now: DateTime<Utc>) -> Result<(), AuthorizationError> {
        if self.is_expired_at(now) {
            return Err(AuthorizationError::RequestExpired);
        }
        if self.is_resolved() {
            return Err(AuthorizationError::AlreadyResolved);
        }
        Ok(())
    }

    pub fn ensure_client(&self, supplied: Option<&ClientId>) -> Result<(), AuthorizationError> {
        match supplied {
            Some(client_id) if client_id != &self.client_id => {
                Err(AuthorizationError::ClientMismatch)
            }
            _ => Ok(()),
        }
    }
}

/// The single write performed when a subject approves a request.
#[derive(Debug, Clone)]
pub struct AcceptedAuthorization {
    pub subject: Subject,
    pub code: AuthorizationCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Accept,
    Reject,
}

impl FromStr for AuthorizationDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "accept" => Ok(AuthorizationDecision::Accept),
            "reject" => Ok(AuthorizationDecision::Reject),
            other => Err(DomainError::validation(format!(
                "unknown authorization decision '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending(expires_at: DateTime<Utc>) -> AuthorizationRequest {
        AuthorizationRequest {
            request_id: RequestId::new("ab12").unwrap(),
            client_id: ClientId::new("https://app.example/client-metadata.json").unwrap(),
            parameters: AuthorizationParameters {
                scope: "atproto".into(),
                state: "xyz".into(),
                redirect_uri: "https://app.example/callback".into(),
            },
            client_auth: ClientAuthMethod::None,
            subject: None,
            code: None,
            accepted: false,
            expires_at,
        }
    }

    #[test]
    fn expiry_is_strictly_after_deadline() {
        let now = Utc::now();
        let req = pending(now);
        assert!(req.ensure_acceptable(now).is_ok());
        assert_eq!(
            req.ensure_acceptable(now + Duration::milliseconds(1)),
            Err(AuthorizationError::RequestExpired)
        );
    }

    #[test]
    fn resolved_request_cannot_be_accepted_again() {
        let now = Utc::now();
        let mut req = pending(now + Duration::minutes(5));
        req.subject = Some(Subject::new("did:plc:alice").unwrap());
        assert_eq!(
            req.ensure_acceptable(now),
            Err(AuthorizationError::AlreadyResolved)
        );
    }

    #[test]
    fn supplied_client_must_match_when_present() {
        let req = pending(Utc::now());
        assert!(req.ensure_client(None).is_ok());
        assert!(req.ensure_client(Some(&req.client_id.clone())).is_ok());
        let other = ClientId::new("https://evil.example/client.json").unwrap();
        assert_eq!(
            req.ensure_client(Some(&other)),
            Err(AuthorizationError::ClientMismatch)
        );
    }

    #[test]
    fn decision_parses_form_values() {
        assert_eq!("accept".parse::<AuthorizationDecision>().unwrap(), AuthorizationDecision::Accept);
        assert_eq!("reject".parse::<AuthorizationDecision>().unwrap(), AuthorizationDecision::Reject);
        assert!("maybe".parse::<AuthorizationDecision>().is_err());
    }
}
