// ABOUTME: Behavioral tests for the on-disk session shared by CLI commands and the wizard
//
// The wizard reads the session file on every check, so logging in or out from
// another shell changes what the review step offers.

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use viecnong::api::AuthPayload;
use viecnong::session::SessionStore;
use viecnong::wizard::{PostJobState, TerminalView, WizardStep};

fn auth_payload() -> AuthPayload {
    serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"id": 4, "name": "Cô Hai", "phone": "0903", "role": "owner"}
    }))
    .unwrap()
}

fn wizard_at_review(store: SessionStore) -> PostJobState {
    let mut state = PostJobState::new(Arc::new(store));
    while state.current_step != WizardStep::Review {
        state.advance();
    }
    state
}

#[test]
fn test_wizard_sees_login_made_after_it_started() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut state = wizard_at_review(SessionStore::new(&path));
    assert_eq!(state.terminal_view(), Some(TerminalView::AuthPrompt));
    assert!(state.begin_submit().is_err());

    // Another process logs in and writes the same file
    SessionStore::new(&path).store_auth(auth_payload()).unwrap();
    assert_eq!(
        state.terminal_view(),
        Some(TerminalView::ReadyToSubmit { busy: false })
    );
    assert!(state.begin_submit().is_ok());
}

#[test]
fn test_logout_elsewhere_brings_back_auth_prompt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    SessionStore::new(&path).store_auth(auth_payload()).unwrap();

    let state = wizard_at_review(SessionStore::new(&path));
    assert!(state.is_authenticated());

    SessionStore::new(&path).clear().unwrap();
    assert_eq!(state.terminal_view(), Some(TerminalView::AuthPrompt));
}
