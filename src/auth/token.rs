//! Submitted credentials
//!
//! Defines the identifier/secret pair presented for one verification attempt.

use std::fmt;

/// A submitted identifier and secret.
///
/// Built per attempt and dropped afterwards. No validation is applied: an
/// empty or whitespace-only identifier is looked up like any other.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationRequest {
    identifier: String,
    secret: String,
}

impl AuthenticationRequest {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Parses a `<identifier> <secret>` line.
    ///
    /// Splits on the first space so the secret may itself contain spaces or
    /// be empty. Returns `None` for blank lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let (identifier, secret) = line.split_once(' ').unwrap_or((line, ""));
        Some(Self::new(identifier, secret))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationRequest")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
