//! Authentication system
//!
//! Handles credential lookup, secret matching, and the authorization stub.

pub mod authenticator;
pub mod matcher;
pub mod results;
pub mod token;
pub mod verifier;

pub use authenticator::Authenticator;
pub use matcher::{CredentialsMatcher, PlaintextMatcher};
pub use results::{AuthenticatedPrincipal, AuthenticationResult, AuthorizationInfo};
pub use token::AuthenticationRequest;
pub use verifier::CredentialVerifier;
