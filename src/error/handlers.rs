//! Error handlers
//!
//! Logs realm errors and maps them to reply codes for the line interface.

use crate::error::types::RealmError;
use log::error;

/// Handle a realm error
pub fn handle_error(err: &RealmError) {
    error!("Realm Error: {}", err);
}

/// Convert error to a reply code
pub fn error_to_reply_code(err: &RealmError) -> u16 {
    match err {
        RealmError::Auth(_) => 530,
        RealmError::Store(_) => 451,
        RealmError::Config(_) => 451,
        RealmError::Io(_) => 421,
    }
}
