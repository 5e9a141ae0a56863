use std::sync::Arc;

use titlesmith_core::{Credential, CredentialGate, EnvCredentialGate, StaticCredentialGate};

#[test]
fn credential_debug_is_redacted() {
    let credential = Credential::new("super-secret");
    let printed = format!("{credential:?}");
    assert!(!printed.contains("super-secret"));
    assert_eq!(credential.expose(), "super-secret");
}

#[test]
fn blank_credential_is_absent() {
    assert!(Credential::non_empty("   ").is_none());
    assert!(Credential::non_empty("k").is_some());
}

#[tokio::test]
async fn env_gate_fails_closed_when_variable_is_missing() {
    let gate = EnvCredentialGate::new("TITLESMITH_TEST_KEY_MISSING");
    std::env::remove_var(gate.var_name());
    assert!(!gate.has_credential().await);
    assert!(gate.credential().is_none());
}

#[tokio::test]
async fn env_gate_treats_blank_value_as_missing() {
    std::env::set_var("TITLESMITH_TEST_KEY_BLANK", "  ");
    let gate = EnvCredentialGate::new("TITLESMITH_TEST_KEY_BLANK");
    assert!(!gate.has_credential().await);
}

#[tokio::test]
async fn env_gate_picks_up_key_after_selection() {
    let gate = EnvCredentialGate::new("TITLESMITH_TEST_KEY_SELECTED");
    std::env::remove_var(gate.var_name());
    assert!(!gate.has_credential().await);

    std::env::set_var(gate.var_name(), "fresh-key");
    gate.request_selection().await.expect("selection");
    assert!(gate.has_credential().await);
    assert_eq!(gate.credential().expect("credential").expose(), "fresh-key");
}

#[test]
fn env_gate_defaults_to_api_key() {
    assert_eq!(EnvCredentialGate::default().var_name(), "API_KEY");
}

#[tokio::test]
async fn static_gate_reports_configured_key() {
    let gate = StaticCredentialGate::with_key("abc");
    assert!(gate.has_credential().await);
    gate.request_selection().await.expect("selection");
    assert_eq!(gate.credential().expect("credential").expose(), "abc");

    let empty = StaticCredentialGate::default();
    assert!(!empty.has_credential().await);
}

#[tokio::test]
async fn shared_gate_delegates() {
    let gate: Arc<dyn CredentialGate> = Arc::new(StaticCredentialGate::with_key("abc"));
    assert!(gate.has_credential().await);
    assert!(gate.credential().is_some());
}
