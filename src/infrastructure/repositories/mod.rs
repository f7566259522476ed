// src/infrastructure/repositories/mod.rs
mod accounts;
mod authorization_requests;
mod error;
mod oauth_sessions;

pub use accounts::PostgresAccountRepository;
pub use authorization_requests::PostgresAuthorizationRequestRepository;
pub use error::map_sqlx;
pub use oauth_sessions::PostgresOAuthSessionRepository;
