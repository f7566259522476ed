// src/infrastructure/clients/mod.rs
mod http_directory;

pub use http_directory::HttpClientDirectory;
