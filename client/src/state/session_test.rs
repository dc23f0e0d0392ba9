use super::*;
use crate::util::storage::{MemoryStorage, StorageError};

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::new(storage.clone(), Arc::new(FixedCredentials::default()))
}

fn persisted(storage: &MemoryStorage) -> Option<String> {
    storage.read(SESSION_STORAGE_KEY).unwrap()
}

/// Storage whose every operation fails.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("read".to_owned()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("write".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("remove".to_owned()))
    }
}

// =============================================================
// restore
// =============================================================

#[test]
fn new_store_starts_restoring() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    assert_eq!(store.phase(), SessionPhase::Restoring);
}

#[test]
fn restore_without_record_is_anonymous() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(!store.state().restoring);
}

#[test]
fn restore_with_valid_record_is_authenticated() {
    let raw = r#"{"id":"7","name":"Ann","email":"ann@example.com"}"#;
    let storage = Arc::new(MemoryStorage::with_entry(SESSION_STORAGE_KEY, raw));
    let mut store = store_with(&storage);
    store.restore();
    assert_eq!(store.phase(), SessionPhase::Authenticated);
    let user = store.state().user.clone().unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.name, "Ann");
    assert_eq!(persisted(&storage).as_deref(), Some(raw));
}

#[test]
fn restore_discards_malformed_records() {
    for raw in ["not json", "", "null", "{}", r#"{"id":1,"name":"x","email":"y"}"#, "[1,2]"] {
        let storage = Arc::new(MemoryStorage::with_entry(SESSION_STORAGE_KEY, raw));
        let mut store = store_with(&storage);
        store.restore();
        assert_eq!(store.phase(), SessionPhase::Anonymous, "record {raw:?}");
        assert_eq!(persisted(&storage), None, "record {raw:?}");
    }
}

#[test]
fn restore_swallows_storage_failures() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage), Arc::new(FixedCredentials::default()));
    store.restore();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
}

#[test]
fn restore_runs_only_once() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();
    storage
        .write(SESSION_STORAGE_KEY, r#"{"id":"1","name":"late","email":"l@x"}"#)
        .unwrap();
    store.restore();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(!store.state().restoring);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_valid_pair_authenticates_and_persists() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();

    assert!(store.login("admin", "admin123"));
    assert_eq!(store.phase(), SessionPhase::Authenticated);

    let user = store.state().user.clone().unwrap();
    assert_eq!(user.name, "admin");
    assert_eq!(user.email, "admin@warehouse.local");

    let raw = persisted(&storage).unwrap();
    let saved: Identity = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, user);
}

#[test]
fn login_with_wrong_pair_changes_nothing() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();

    for (user, pass) in [("admin", "wrong"), ("Admin", "admin123"), ("", ""), ("admin ", "admin123")] {
        assert!(!store.login(user, pass));
        assert_eq!(store.phase(), SessionPhase::Anonymous);
        assert_eq!(persisted(&storage), None);
    }
}

#[test]
fn failed_login_keeps_existing_identity() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();
    assert!(store.login("admin", "admin123"));
    let before = store.state().clone();
    let raw_before = persisted(&storage);

    assert!(!store.login("mallory", "guess"));
    assert_eq!(store.state(), &before);
    assert_eq!(persisted(&storage), raw_before);
}

#[test]
fn login_uses_the_injected_verifier() {
    struct AllowBob;
    impl CredentialVerifier for AllowBob {
        fn verify(&self, username: &str, _credential: &str) -> bool {
            username == "bob"
        }
    }

    let storage = Arc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone(), Arc::new(AllowBob));
    store.restore();
    assert!(!store.login("admin", "admin123"));
    assert!(store.login("bob", "anything"));
    assert_eq!(store.state().user.as_ref().map(|u| u.name.as_str()), Some("bob"));
}

#[test]
fn login_survives_storage_write_failure() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage), Arc::new(FixedCredentials::default()));
    store.restore();
    assert!(store.login("admin", "admin123"));
    assert_eq!(store.phase(), SessionPhase::Authenticated);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_identity_and_record() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();
    assert!(store.login("admin", "admin123"));

    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert_eq!(persisted(&storage), None);
}

#[test]
fn logout_twice_is_safe() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    store.restore();
    store.logout();
    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert_eq!(persisted(&storage), None);
}

#[test]
fn logout_survives_storage_failure() {
    let mut store = SessionStore::new(Arc::new(BrokenStorage), Arc::new(FixedCredentials::default()));
    store.restore();
    assert!(store.login("admin", "admin123"));
    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
}

#[test]
fn restored_session_can_log_out_and_back_in() {
    let raw = r#"{"id":"7","name":"Ann","email":"ann@example.com"}"#;
    let storage = Arc::new(MemoryStorage::with_entry(SESSION_STORAGE_KEY, raw));
    let mut store = store_with(&storage);
    store.restore();
    store.logout();
    assert!(store.login("admin", "admin123"));
    assert_eq!(store.phase(), SessionPhase::Authenticated);
    assert!(!store.state().restoring);
}

// =============================================================
// FixedCredentials
// =============================================================

#[test]
fn fixed_credentials_require_exact_match() {
    let creds = FixedCredentials::new("ops", "s3cret");
    assert!(creds.verify("ops", "s3cret"));
    assert!(!creds.verify("ops", "S3cret"));
    assert!(!creds.verify("OPS", "s3cret"));
}

// =============================================================
// Mutations before restore
// =============================================================

#[test]
fn logout_before_restore_is_anonymous_and_restore_stays_done() {
    let raw = r#"{"id":"7","name":"Ann","email":"ann@example.com"}"#;
    let storage = Arc::new(MemoryStorage::with_entry(SESSION_STORAGE_KEY, raw));
    let mut store = store_with(&storage);
    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert_eq!(persisted(&storage), None);

    store.restore();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
}

#[test]
fn login_before_restore_is_authenticated() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    assert!(store.login("admin", "admin123"));
    assert_eq!(store.phase(), SessionPhase::Authenticated);
}

#[test]
fn failed_login_before_restore_keeps_restoring() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = store_with(&storage);
    assert!(!store.login("admin", "nope"));
    assert_eq!(store.phase(), SessionPhase::Restoring);
}

// =============================================================
// Session handle
// =============================================================

#[test]
fn session_handle_drives_the_shared_store() {
    let owner = Owner::new();
    owner.set();

    let storage = Arc::new(MemoryStorage::new());
    let session = Session::new(store_with(&storage));
    let reader = session;
    assert_eq!(reader.state().phase(), SessionPhase::Restoring);

    session.restore();
    assert_eq!(reader.state().phase(), SessionPhase::Anonymous);

    assert!(!session.login("admin", "wrong"));
    assert_eq!(reader.state().phase(), SessionPhase::Anonymous);
    assert_eq!(persisted(&storage), None);

    assert!(session.login("admin", "admin123"));
    assert_eq!(reader.state().phase(), SessionPhase::Authenticated);
    assert!(persisted(&storage).is_some());

    session.logout();
    session.logout();
    assert_eq!(reader.state().phase(), SessionPhase::Anonymous);
    assert_eq!(persisted(&storage), None);
}
