//! In-memory account store

use std::collections::HashMap;

use log::debug;

use super::traits::AccountStore;
use crate::account::Account;
use crate::error::StoreError;

/// Account store backed by a `HashMap` keyed on identifier.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: HashMap<String, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the given accounts.
    ///
    /// Identifiers must be unique; the first repeated identifier is reported
    /// as `StoreError::DuplicateIdentifier`.
    pub fn from_accounts<I>(accounts: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Account>,
    {
        let mut map = HashMap::new();
        for account in accounts {
            if map.contains_key(account.identifier()) {
                return Err(StoreError::DuplicateIdentifier(
                    account.identifier().to_string(),
                ));
            }
            map.insert(account.identifier().to_string(), account);
        }

        debug!("Account store loaded with {} accounts", map.len());
        Ok(Self { accounts: map })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.accounts.contains_key(identifier)
    }

    /// Returns all stored identifiers in sorted order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_identifier(&self, identifier: &str) -> Option<Account> {
        self.accounts.get(identifier).cloned()
    }
}
