//! Account model
//!
//! A registered principal as held by an account store.

use std::fmt;

/// One registered principal.
///
/// Accounts are created outside this crate and are read-only from the
/// verifier's point of view. The secret is stored as given (plaintext).
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    identifier: String,
    secret: String,
}

impl Account {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns the unique identifier of the account.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the stored secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Secrets never reach log output through Debug or Display.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self.identifier)
    }
}
