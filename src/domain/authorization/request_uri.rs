// src/domain/authorization/request_uri.rs
use crate::domain::authorization::value_objects::RequestId;
use thiserror::Error;

/// Prefix of every request URI handed to the browser.
pub const REQUEST_URI_PREFIX: &str = "urn:ietf:params:oauth:request_uri:req-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedToken {
    #[error("request uri is missing the expected prefix")]
    MissingPrefix,
    #[error("request uri carries an invalid request id")]
    InvalidId,
}

/// Maps internal request ids to the request URIs exposed to user agents.
///
/// The mapping is a pure string wrapper with no storage behind it, so a decode
/// failure can be reported without looking anything up.
pub struct RequestUriCodec;

impl RequestUriCodec {
    pub fn encode(id: &RequestId) -> String {
        format!("{REQUEST_URI_PREFIX}{}", id.as_str())
    }

    pub fn decode(token: &str) -> Result<RequestId, MalformedToken> {
        let raw = token
            .strip_prefix(REQUEST_URI_PREFIX)
            .ok_or(MalformedToken::MissingPrefix)?;
        RequestId::new(raw).map_err(|_| MalformedToken::InvalidId)
    }
}
