pub mod account;
pub mod oauth_authorize;
