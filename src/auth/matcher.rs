//! Secret matching
//!
//! Compares a submitted secret with the one held by the store.

use subtle::ConstantTimeEq;

/// Decides whether a submitted secret matches a stored one.
pub trait CredentialsMatcher: Send + Sync {
    fn matches(&self, submitted: &str, stored: &str) -> bool;
}

/// Exact comparison of plaintext secrets, in constant time for equal lengths.
///
/// Secrets are still stored unhashed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextMatcher;

impl CredentialsMatcher for PlaintextMatcher {
    fn matches(&self, submitted: &str, stored: &str) -> bool {
        submitted.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}
