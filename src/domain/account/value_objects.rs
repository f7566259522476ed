// src/domain/account/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("password hash cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

/// A syntactically plausible email address. Deliverability is checked
/// elsewhere, through the confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::validation("email address must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(DomainError::validation("email address is malformed"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("email address cannot contain whitespace"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_single_at_with_both_sides() {
        assert!(EmailAddress::new("alice@example.com").is_ok());
        assert_eq!(
            EmailAddress::new("  bob@example.com ").unwrap().as_str(),
            "bob@example.com"
        );
        assert!(EmailAddress::new("alice").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("alice@").is_err());
        assert!(EmailAddress::new("a@b@c").is_err());
        assert!(EmailAddress::new("al ice@example.com").is_err());
    }
}
