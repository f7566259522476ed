// src/domain/authorization/errors.rs
use crate::domain::authorization::request_uri::MalformedToken;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("invalid request reference: {0}")]
    InvalidRequestReference(#[from] MalformedToken),
    #[error("client id does not match the client id for the supplied request")]
    ClientMismatch,
    #[error("the request has expired")]
    RequestExpired,
    #[error("this request was already authorized")]
    AlreadyResolved,
}
