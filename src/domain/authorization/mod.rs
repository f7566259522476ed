// src/domain/authorization/mod.rs
pub mod entity;
pub mod errors;
pub mod repository;
pub mod request_uri;
pub mod value_objects;

pub use entity::{
    AcceptedAuthorization, AuthorizationDecision, AuthorizationParameters, AuthorizationRequest,
};
pub use errors::AuthorizationError;
pub use repository::{AuthorizationRequestRepository, CodeRedemption};
pub use request_uri::{MalformedToken, RequestUriCodec};
pub use value_objects::{
    AuthorizationCode, ClientAuthMethod, ClientId, RequestId, ScopeSet, Subject,
};
