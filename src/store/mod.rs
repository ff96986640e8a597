//! Account storage
//!
//! The lookup interface the verifier depends on, and an in-memory store
//! seeded from configuration.

pub mod memory;
pub mod traits;

pub use memory::InMemoryAccountStore;
pub use traits::AccountStore;
