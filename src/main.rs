//! Credential realm - Entry Point
//!
//! Reads `<identifier> <secret>` lines from stdin and reports whether each
//! pair authenticates against the configured accounts.

use log::info;
use tokio::io::BufReader;

use credential_realm::auth::PlaintextMatcher;
use credential_realm::config::RealmConfig;
use credential_realm::error::RealmError;
use credential_realm::error::handlers::handle_error;
use credential_realm::handler::serve_lines;
use credential_realm::{Authenticator, CredentialVerifier};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RealmError> {
    let config = RealmConfig::load()?;
    let store = config.build_store()?;
    info!(
        "Realm '{}' ready with {} accounts",
        config.realm_name,
        store.len()
    );

    let authenticator = Authenticator::new(CredentialVerifier::new(store), PlaintextMatcher);

    let stdin = BufReader::new(tokio::io::stdin());
    serve_lines(&authenticator, stdin, tokio::io::stdout()).await?;

    info!("Shutting down");
    Ok(())
}
