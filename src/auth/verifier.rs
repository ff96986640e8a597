//! Credential verifier
//!
//! Looks up accounts for submitted credentials. Comparing the submitted
//! secret against the stored one is left to the caller (see `Authenticator`).

use log::debug;

use super::results::{AuthenticationResult, AuthorizationInfo};
use super::token::AuthenticationRequest;
use crate::store::AccountStore;

/// Answers whether an account exists for an identifier and what secret it holds.
#[derive(Debug, Clone)]
pub struct CredentialVerifier<S> {
    store: S,
}

impl<S: AccountStore> CredentialVerifier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Looks up the account named by `request`.
    ///
    /// Returns `NotFound` when the store has no such account. Otherwise
    /// returns `Found` bound to the stored secret, without checking the
    /// submitted one.
    pub fn verify(&self, request: &AuthenticationRequest) -> AuthenticationResult {
        debug!("Verifying credentials for '{}'", request.identifier());

        let Some(account) = self.store.find_by_identifier(request.identifier()) else {
            debug!("No account for '{}'", request.identifier());
            return AuthenticationResult::NotFound;
        };

        debug!("Found {}", account);
        AuthenticationResult::Found {
            identifier: account.identifier().to_string(),
            stored_secret: account.secret().to_string(),
        }
    }

    /// Authorization lookup. Always `NotImplemented`.
    pub fn authorization_info(&self, identifier: &str) -> AuthorizationInfo {
        debug!("Authorization requested for '{}'", identifier);
        AuthorizationInfo::NotImplemented
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
