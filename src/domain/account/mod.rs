// src/domain/account/mod.rs
pub mod credential;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use credential::{CredentialError, CredentialKind, CredentialPayload, PendingCredential};
pub use entity::Account;
pub use repository::{AccountRepository, OAuthSessionRepository};
pub use value_objects::{EmailAddress, PasswordHash};
