//! Authentication result types
//!
//! Defines result values returned by verification, authorization and the
//! authenticator.

/// Outcome of a credential lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationResult {
    /// An account exists; carries the stored secret for the caller to compare.
    Found {
        identifier: String,
        stored_secret: String,
    },
    /// No account with the submitted identifier.
    NotFound,
}

impl AuthenticationResult {
    pub fn is_found(&self) -> bool {
        matches!(self, AuthenticationResult::Found { .. })
    }

    /// Returns the stored secret of a found account.
    pub fn stored_secret(&self) -> Option<&str> {
        match self {
            AuthenticationResult::Found { stored_secret, .. } => Some(stored_secret),
            AuthenticationResult::NotFound => None,
        }
    }
}

/// Authorization data for a principal.
///
/// Permission lookup is not implemented; this is the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationInfo {
    NotImplemented,
}

/// A principal whose secret has been matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub identifier: String,
}
