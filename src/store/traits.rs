//! Account store trait

use std::sync::Arc;

use crate::account::Account;

/// Read-only account lookup by identifier.
///
/// Implementations must be `Send + Sync`; lookups take `&self` and must not
/// modify the stored accounts.
pub trait AccountStore: Send + Sync {
    /// Returns the account with exactly this identifier, if one exists.
    fn find_by_identifier(&self, identifier: &str) -> Option<Account>;
}

impl<S: AccountStore + ?Sized> AccountStore for &S {
    fn find_by_identifier(&self, identifier: &str) -> Option<Account> {
        (**self).find_by_identifier(identifier)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    fn find_by_identifier(&self, identifier: &str) -> Option<Account> {
        (**self).find_by_identifier(identifier)
    }
}
