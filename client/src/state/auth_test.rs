use super::*;

fn ann() -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_restoring() {
    let state = AuthState::default();
    assert!(state.restoring);
    assert_eq!(state.phase(), SessionPhase::Restoring);
}

// =============================================================
// Phase derivation
// =============================================================

#[test]
fn restoring_wins_even_with_user_present() {
    let state = AuthState { user: Some(ann()), restoring: true };
    assert_eq!(state.phase(), SessionPhase::Restoring);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_without_user_is_anonymous() {
    let state = AuthState { user: None, restoring: false };
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn restored_with_user_is_authenticated() {
    let state = AuthState { user: Some(ann()), restoring: false };
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(state.is_authenticated());
}

#[test]
fn identity_json_uses_plain_field_names() {
    let json = serde_json::to_value(ann()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "u1", "name": "Ann", "email": "ann@example.com" })
    );
}
