// src/infrastructure/security/mod.rs
pub mod code_issuer;
pub mod password;
pub mod session_authenticator;
