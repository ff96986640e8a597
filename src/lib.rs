pub mod account;
pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod store;

pub use account::Account;
pub use auth::{Authenticator, CredentialVerifier};
pub use store::{AccountStore, InMemoryAccountStore};
