pub mod auth;
pub mod authorization;

pub use auth::AuthenticatedSubject;
pub use authorization::{AuthorizationGrantDto, AuthorizationViewDto, RedirectTarget};
