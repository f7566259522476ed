// src/domain/secret.rs
use subtle::ConstantTimeEq;

/// Compare two secrets without short-circuiting on the first differing byte.
pub fn constant_time_eq(expected: &str, supplied: &str) -> bool {
    expected.as_bytes().ct_eq(supplied.as_bytes()).into()
}
