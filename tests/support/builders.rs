// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use consent_core::application::ports::client_directory::ClientMetadata;
use consent_core::domain::account::{Account, EmailAddress, PasswordHash, PendingCredential};
use consent_core::domain::authorization::{
    AuthorizationParameters, AuthorizationRequest, ClientAuthMethod, ClientId, RequestId,
    RequestUriCodec, Subject,
};

use super::mocks::fixed_now;

pub const ISSUER: &str = "https://id.example";
pub const CLIENT_ID: &str = "https://app.example/client-metadata.json";
pub const CLIENT_URI: &str = "https://app.example";
pub const REDIRECT_URI: &str = "https://app.example/cb";
pub const SUBJECT: &str = "did:plc:alice";
pub const HANDLE: &str = "alice.test";

pub fn client_metadata() -> ClientMetadata {
    ClientMetadata {
        client_id: ClientId::new(CLIENT_ID).unwrap(),
        client_name: "Example App".into(),
        client_uri: CLIENT_URI.into(),
    }
}

pub struct AuthorizationRequestBuilder {
    request_id: String,
    client_auth: ClientAuthMethod,
    scope: String,
    state: String,
    redirect_uri: String,
    expires_at: DateTime<Utc>,
}

impl AuthorizationRequestBuilder {
    pub fn new() -> Self {
        Self {
            request_id: "a1b2c3".into(),
            client_auth: ClientAuthMethod::None,
            scope: "atproto transition:generic".into(),
            state: "xyz123".into(),
            redirect_uri: REDIRECT_URI.into(),
            expires_at: fixed_now() + Duration::minutes(5),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.request_id = id.into();
        self
    }

    pub fn private_key_jwt(mut self) -> Self {
        self.client_auth = ClientAuthMethod::PrivateKeyJwt;
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = at;
        self
    }

    pub fn request_uri(&self) -> String {
        RequestUriCodec::encode(&RequestId::new(self.request_id.clone()).unwrap())
    }

    pub fn build(self) -> AuthorizationRequest {
        AuthorizationRequest {
            request_id: RequestId::new(self.request_id).unwrap(),
            client_id: ClientId::new(CLIENT_ID).unwrap(),
            parameters: AuthorizationParameters {
                scope: self.scope,
                state: self.state,
                redirect_uri: self.redirect_uri,
            },
            client_auth: self.client_auth,
            subject: None,
            code: None,
            accepted: false,
            expires_at: self.expires_at,
        }
    }
}

pub struct AccountBuilder {
    subject: String,
    email: String,
    password_reset: PendingCredential,
    email_update: PendingCredential,
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self {
            subject: SUBJECT.into(),
            email: "alice@example.com".into(),
            password_reset: PendingCredential::default(),
            email_update: PendingCredential::default(),
        }
    }

    pub fn password_reset(mut self, code: &str, expires_at: DateTime<Utc>) -> Self {
        self.password_reset = PendingCredential::issued(code, expires_at);
        self
    }

    pub fn email_update(mut self, code: &str, expires_at: DateTime<Utc>) -> Self {
        self.email_update = PendingCredential::issued(code, expires_at);
        self
    }

    pub fn build(self) -> Account {
        Account {
            subject: Subject::new(self.subject).unwrap(),
            handle: HANDLE.into(),
            email: EmailAddress::new(self.email).unwrap(),
            email_confirmed_at: Some(fixed_now() - Duration::days(30)),
            password_hash: PasswordHash::new("hashed:old-password").unwrap(),
            password_reset: self.password_reset,
            email_update: self.email_update,
        }
    }
}
