//! Authenticator
//!
//! Runs the verifier, then compares secrets with a matcher, turning the
//! outcome into a principal or an `AuthError`.

use log::{info, warn};

use super::matcher::CredentialsMatcher;
use super::results::{AuthenticatedPrincipal, AuthenticationResult};
use super::token::AuthenticationRequest;
use super::verifier::CredentialVerifier;
use crate::error::AuthError;
use crate::store::AccountStore;

pub struct Authenticator<S, M> {
    verifier: CredentialVerifier<S>,
    matcher: M,
}

impl<S: AccountStore, M: CredentialsMatcher> Authenticator<S, M> {
    pub fn new(verifier: CredentialVerifier<S>, matcher: M) -> Self {
        Self { verifier, matcher }
    }

    /// Authenticates `request` against the store.
    pub fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        match self.verifier.verify(request) {
            AuthenticationResult::NotFound => {
                warn!(
                    "Authentication failed: unknown account '{}'",
                    request.identifier()
                );
                Err(AuthError::UnknownAccount(request.identifier().to_string()))
            }
            AuthenticationResult::Found {
                identifier,
                stored_secret,
            } => {
                if self.matcher.matches(request.secret(), &stored_secret) {
                    info!("Authenticated '{}'", identifier);
                    Ok(AuthenticatedPrincipal { identifier })
                } else {
                    warn!(
                        "Authentication failed: incorrect credentials for '{}'",
                        identifier
                    );
                    Err(AuthError::IncorrectCredentials(identifier))
                }
            }
        }
    }

    pub fn verifier(&self) -> &CredentialVerifier<S> {
        &self.verifier
    }
}
