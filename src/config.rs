//! Configuration management for the credential realm
//!
//! Loads the realm name and the seed accounts from `config.toml`, with
//! environment overrides under the `REALM_` prefix.

use config::{Config, ConfigError, Environment, File, FileFormat};
use log::debug;
use serde::Deserialize;

use crate::account::Account;
use crate::error::RealmError;
use crate::store::InMemoryAccountStore;

/// Realm configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RealmConfig {
    /// Name reported in startup logs
    /// Environment: REALM_REALM_NAME
    pub realm_name: String,

    /// Accounts loaded into the in-memory store (TOML only)
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
}

/// One account entry as written in the config file.
#[derive(Deserialize, Clone)]
pub struct AccountSeed {
    pub identifier: String,
    pub secret: String,
}

impl std::fmt::Debug for AccountSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountSeed")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl From<AccountSeed> for Account {
    fn from(seed: AccountSeed) -> Self {
        Account::new(seed.identifier, seed.secret)
    }
}

impl RealmConfig {
    /// Load configuration from config.toml with environment overrides
    ///
    /// Tries the installed layout first, then the working directory. The
    /// error from the last attempt is returned when both fail.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("credential-realm/config").or_else(|e| {
            debug!("No usable configuration at credential-realm/config: {}", e);
            Self::load_from("config")
        })
    }

    /// Load configuration from one path (extension optional) with environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let config: RealmConfig = Config::builder()
            .add_source(File::with_name(config_path))
            .add_source(
                Environment::with_prefix("REALM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        debug!("Loaded configuration from {}", config_path);
        Ok(config)
    }

    /// Parse configuration from a TOML string, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: RealmConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.realm_name.trim().is_empty() {
            return Err(ConfigError::Message("realm_name cannot be empty".into()));
        }

        if self.accounts.iter().any(|a| a.identifier.is_empty()) {
            return Err(ConfigError::Message(
                "account identifier cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Build the in-memory store from the configured accounts.
    pub fn build_store(&self) -> Result<InMemoryAccountStore, RealmError> {
        let accounts = self.accounts.iter().cloned().map(Account::from);
        Ok(InMemoryAccountStore::from_accounts(accounts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::AccountStore;

    const SAMPLE: &str = r#"
realm_name = "test"

[[accounts]]
identifier = "root"
secret = "123"

[[accounts]]
identifier = "bob"
secret = ""
"#;

    #[test]
    fn test_parse_sample() {
        let config = RealmConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.realm_name, "test");
        assert_eq!(config.accounts.len(), 2);

        let store = config.build_store().unwrap();
        assert_eq!(store.find_by_identifier("bob").unwrap().secret(), "");
    }

    #[test]
    fn test_accounts_default_to_empty() {
        let config = RealmConfig::from_toml_str("realm_name = \"empty\"").unwrap();
        assert!(config.accounts.is_empty());
        assert!(config.build_store().unwrap().is_empty());
    }

    #[test]
    fn test_empty_realm_name_rejected() {
        assert!(RealmConfig::from_toml_str("realm_name = \" \"").is_err());
    }

    #[test]
    fn test_missing_realm_name_rejected() {
        assert!(RealmConfig::from_toml_str("").is_err());
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let toml = "realm_name = \"x\"\n[[accounts]]\nidentifier = \"\"\nsecret = \"s\"\n";
        assert!(RealmConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_duplicate_accounts_fail_store_build() {
        let toml = r#"
realm_name = "x"
[[accounts]]
identifier = "root"
secret = "1"
[[accounts]]
identifier = "root"
secret = "2"
"#;
        let config = RealmConfig::from_toml_str(toml).unwrap();
        match config.build_store() {
            Err(RealmError::Store(StoreError::DuplicateIdentifier(id))) => assert_eq!(id, "root"),
            other => panic!("expected duplicate identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        assert!(RealmConfig::load_from("no/such/realm/config").is_err());
    }

    #[test]
    fn test_load_falls_back_to_working_directory() {
        let config = RealmConfig::load().unwrap();
        let store = config.build_store().unwrap();
        assert!(store.contains("root"));
    }

    #[test]
    fn test_seed_debug_hides_secret() {
        let config = RealmConfig::from_toml_str(SAMPLE).unwrap();
        assert!(!format!("{:?}", config).contains("123"));
    }
}
