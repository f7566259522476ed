// src/application/commands/authorization/redirect.rs
use crate::application::{
    dto::RedirectTarget,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::authorization::{AuthorizationCode, ClientAuthMethod};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Where the response parameters are placed on the callback URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Query,
    Fragment,
}

impl ResponseMode {
    /// Clients proving key possession get a query string; everyone else gets a
    /// fragment, which browsers never send to servers.
    pub fn for_client(method: &ClientAuthMethod) -> Self {
        if method.is_proof_of_possession() {
            ResponseMode::Query
        } else {
            ResponseMode::Fragment
        }
    }
}

/// Octets escaped inside a parameter value. `:` and `/` stay readable so the
/// issuer URL survives verbatim.
const PARAM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/');

/// A client callback that parsed cleanly and can carry response parameters.
#[derive(Debug, Clone)]
pub struct Callback {
    url: Url,
    mode: ResponseMode,
}

#[derive(Debug, Clone)]
pub struct RedirectEncoder {
    issuer: String,
}

impl RedirectEncoder {
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Parse the registered redirect URI. Must run before the accept is
    /// persisted.
    pub fn callback(&self, redirect_uri: &str, mode: ResponseMode) -> ApplicationResult<Callback> {
        let url = Url::parse(redirect_uri).map_err(|err| {
            ApplicationError::upstream(format!("client redirect_uri is not a valid URL: {err}"))
        })?;
        if url.cannot_be_a_base() || url.fragment().is_some() {
            return Err(ApplicationError::upstream(
                "client redirect_uri cannot carry response parameters",
            ));
        }
        Ok(Callback { url, mode })
    }

    /// Build the success redirect. Parameter order is fixed: state, iss, code.
    pub fn accepted(
        &self,
        callback: Callback,
        state: &str,
        code: &AuthorizationCode,
    ) -> RedirectTarget {
        let params = [
            ("state", state),
            ("iss", self.issuer.as_str()),
            ("code", code.as_str()),
        ]
        .into_iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, PARAM_VALUE)))
        .collect::<Vec<_>>()
        .join("&");

        let Callback { mut url, mode } = callback;
        match mode {
            ResponseMode::Query => {
                let query = match url.query().filter(|existing| !existing.is_empty()) {
                    Some(existing) => format!("{existing}&{params}"),
                    None => params,
                };
                url.set_query(Some(&query));
            }
            ResponseMode::Fragment => url.set_fragment(Some(&params)),
        }
        RedirectTarget::new(url.into())
    }

    pub fn rejected(&self, client_uri: &str) -> ApplicationResult<RedirectTarget> {
        let url = Url::parse(client_uri).map_err(|err| {
            ApplicationError::upstream(format!("client_uri is not a valid URL: {err}"))
        })?;
        // The registered form is kept unless it needs escaping to fit a header.
        if client_uri.bytes().all(|b| b.is_ascii_graphic()) {
            Ok(RedirectTarget::new(client_uri.to_string()))
        } else {
            Ok(RedirectTarget::new(url.into()))
        }
    }
}
