// src/application/ports/mod.rs
pub mod client_directory;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClientDirectoryPort = dyn client_directory::ClientDirectory;
pub type CodeIssuerPort = dyn security::CodeIssuer;
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type SessionAuthenticatorPort = dyn security::SessionAuthenticator;
pub type ClockPort = dyn time::Clock;
