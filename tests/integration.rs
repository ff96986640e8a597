use credential_realm::auth::{
    AuthenticationRequest, AuthenticationResult, AuthorizationInfo, PlaintextMatcher,
};
use credential_realm::config::RealmConfig;
use credential_realm::error::AuthError;
use credential_realm::{
    Account, AccountStore, Authenticator, CredentialVerifier, InMemoryAccountStore,
};
use std::sync::Arc;

fn store_with(accounts: &[(&str, &str)]) -> InMemoryAccountStore {
    let accounts = accounts.iter().map(|(id, s)| Account::new(*id, *s));
    InMemoryAccountStore::from_accounts(accounts).unwrap()
}

#[test]
fn test_root_scenario() {
    let verifier = CredentialVerifier::new(store_with(&[("root", "123")]));
    let result = verifier.verify(&AuthenticationRequest::new("root", "123"));
    assert_eq!(result.stored_secret(), Some("123"));
}

#[test]
fn test_empty_store_scenario() {
    let verifier = CredentialVerifier::new(InMemoryAccountStore::new());
    let result = verifier.verify(&AuthenticationRequest::new("root", "123"));
    assert_eq!(result, AuthenticationResult::NotFound);
}

#[test]
fn test_every_stored_account_is_found_with_its_secret() {
    let accounts = [("alice", "alice123"), ("bob", ""), ("admin", "a d m i n")];
    let verifier = CredentialVerifier::new(store_with(&accounts));

    for (id, secret) in accounts {
        match verifier.verify(&AuthenticationRequest::new(id, "anything")) {
            AuthenticationResult::Found {
                identifier,
                stored_secret,
            } => {
                assert_eq!(identifier, id);
                assert_eq!(stored_secret, secret);
            }
            AuthenticationResult::NotFound => panic!("{} should be found", id),
        }
    }

    for id in ["carol", "ALICE", "", " ", "\t"] {
        assert_eq!(
            verifier.verify(&AuthenticationRequest::new(id, "")),
            AuthenticationResult::NotFound
        );
    }
}

#[test]
fn test_verify_leaves_store_unchanged() {
    let store = Arc::new(store_with(&[("root", "123"), ("bob", "bob123")]));
    let before: Vec<Account> = store
        .identifiers()
        .into_iter()
        .filter_map(|id| store.find_by_identifier(id))
        .collect();

    let verifier = CredentialVerifier::new(Arc::clone(&store));
    for (id, secret) in [("root", "bad"), ("nobody", "x"), ("bob", "bob123")] {
        verifier.verify(&AuthenticationRequest::new(id, secret));
    }

    let after: Vec<Account> = store
        .identifiers()
        .into_iter()
        .filter_map(|id| store.find_by_identifier(id))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_authorization_stub() {
    let verifier = CredentialVerifier::new(store_with(&[("root", "123")]));
    assert_eq!(
        verifier.authorization_info("root"),
        AuthorizationInfo::NotImplemented
    );
    assert_eq!(
        verifier.authorization_info("nobody"),
        AuthorizationInfo::NotImplemented
    );
}

#[test]
fn test_authenticator_from_config() {
    let config = RealmConfig::from_toml_str(
        "realm_name = \"it\"\n[[accounts]]\nidentifier = \"root\"\nsecret = \"123\"\n",
    )
    .unwrap();
    let store = config.build_store().unwrap();
    let auth = Authenticator::new(CredentialVerifier::new(store), PlaintextMatcher);

    assert_eq!(
        auth.authenticate(&AuthenticationRequest::new("root", "123"))
            .unwrap()
            .identifier,
        "root"
    );
    assert_eq!(
        auth.authenticate(&AuthenticationRequest::new("root", "1234")),
        Err(AuthError::IncorrectCredentials("root".into()))
    );
    assert_eq!(
        auth.authenticate(&AuthenticationRequest::new("ghost", "123")),
        Err(AuthError::UnknownAccount("ghost".into()))
    );
    assert!(auth.verifier().store().contains("root"));
}

#[test]
fn test_parsed_line_round_trip_through_authenticator() {
    let auth = Authenticator::new(
        CredentialVerifier::new(store_with(&[("alice", "correct horse")])),
        PlaintextMatcher,
    );
    let request = AuthenticationRequest::parse_line("alice correct horse\r\n").unwrap();
    assert!(auth.authenticate(&request).is_ok());
}
