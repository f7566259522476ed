pub mod clients;
pub mod database;
pub mod memory;
pub mod repositories;
pub mod security;
pub mod time;
