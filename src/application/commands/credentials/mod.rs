mod password;
mod reset_password;
mod revoke_session;
mod service;
mod update_email;
mod verifier;

pub use reset_password::ResetPasswordCommand;
pub use revoke_session::RevokeSessionCommand;
pub use service::CredentialService;
pub use update_email::UpdateEmailCommand;
