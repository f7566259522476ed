// src/domain/mod.rs
pub mod account;
pub mod authorization;
pub mod errors;
pub mod secret;
