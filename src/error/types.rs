//! Error types
//!
//! Defines domain-specific error types for each module of the realm.

use std::fmt;
use std::io;

/// Authentication errors raised at the framework boundary.
///
/// The verifier itself never produces these; a missing account is an
/// absence value until the authenticator turns it into `UnknownAccount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    UnknownAccount(String),
    IncorrectCredentials(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UnknownAccount(u) => write!(f, "Unknown account: {}", u),
            AuthError::IncorrectCredentials(u) => write!(f, "Incorrect credentials for: {}", u),
        }
    }
}

impl std::error::Error for AuthError {}

/// Account store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateIdentifier(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateIdentifier(u) => write!(f, "Duplicate identifier: {}", u),
        }
    }
}

impl std::error::Error for StoreError {}

/// General realm error that encompasses all error types
#[derive(Debug)]
pub enum RealmError {
    Auth(AuthError),
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for RealmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealmError::Auth(e) => write!(f, "Authentication error: {}", e),
            RealmError::Store(e) => write!(f, "Store error: {}", e),
            RealmError::Config(e) => write!(f, "Configuration error: {}", e),
            RealmError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RealmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RealmError::Auth(e) => Some(e),
            RealmError::Store(e) => Some(e),
            RealmError::Config(e) => Some(e),
            RealmError::Io(e) => Some(e),
        }
    }
}

impl From<AuthError> for RealmError {
    fn from(error: AuthError) -> Self {
        RealmError::Auth(error)
    }
}

impl From<StoreError> for RealmError {
    fn from(error: StoreError) -> Self {
        RealmError::Store(error)
    }
}

impl From<config::ConfigError> for RealmError {
    fn from(error: config::ConfigError) -> Self {
        RealmError::Config(error)
    }
}

impl From<io::Error> for RealmError {
    fn from(error: io::Error) -> Self {
        RealmError::Io(error)
    }
}
