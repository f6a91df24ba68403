use super::*;

fn user(id: i64, role: Role) -> User {
    User {
        id,
        username: "alice".to_owned(),
        email: Some("alice@example.com".to_owned()),
        full_name: None,
        role,
        is_active: true,
        created_at: None,
    }
}

fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.set_token("abc123");
    state.set_user(user(7, role));
    state
}

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
    let backend: Arc<dyn SessionStorage> = storage.clone();
    SessionStore::new(backend)
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.restored);
}

#[test]
fn token_and_user_make_session_authenticated() {
    let state = signed_in(Role::User);
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn admin_role_sets_admin_flag() {
    assert!(signed_in(Role::Admin).is_admin());
    assert!(!signed_in(Role::Other).is_admin());
}

#[test]
fn token_without_user_is_not_authenticated() {
    let mut state = SessionState::default();
    state.set_token("abc123");
    assert!(!state.is_authenticated());
}

#[test]
fn placeholder_identity_is_not_authenticated() {
    let mut state = SessionState::default();
    state.set_token("abc123");
    state.set_user(user(0, Role::Admin));
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let mut state = SessionState::default();
    state.set_user(user(7, Role::Admin));
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn logout_clears_everything_from_any_state() {
    for role in [Role::Admin, Role::User, Role::Other] {
        let mut state = signed_in(role);
        state.logout();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
        assert!(state.token.is_empty());
        assert!(state.user.is_none());
    }

    let mut empty = SessionState::default();
    empty.logout();
    assert!(!empty.is_authenticated());
}

#[test]
fn logout_keeps_restored_marker() {
    let mut state = signed_in(Role::User);
    state.restored = true;
    state.logout();
    assert!(state.restored);
}

#[test]
fn partial_update_changes_only_named_field() {
    let mut state = signed_in(Role::User);
    let before = state.user.clone().expect("user");

    state.update_user_partial(&UserPatch { full_name: Some("Alice L.".to_owned()), ..UserPatch::default() });

    let mut expected = before;
    expected.full_name = Some("Alice L.".to_owned());
    assert_eq!(state.user, Some(expected));
    assert_eq!(state.token, "abc123");
}

#[test]
fn partial_update_without_user_is_noop() {
    let mut state = SessionState::default();
    state.update_user_partial(&UserPatch { email: Some("x@y.z".to_owned()), ..UserPatch::default() });
    assert!(state.user.is_none());
}

// =============================================================
// Snapshot schema
// =============================================================

#[test]
fn missing_snapshot_restores_empty_session() {
    let state = SessionState::from_snapshot(None);
    assert!(state.restored);
    assert!(!state.is_authenticated());
}

#[test]
fn snapshot_round_trips_token_and_user() {
    let original = signed_in(Role::Admin);
    let raw = serde_json::to_string(&original.snapshot()).expect("encode");
    let restored = SessionState::from_snapshot(Some(&raw));
    assert!(restored.restored);
    assert_eq!(restored.token, "abc123");
    assert_eq!(restored.user, original.user);
    assert!(restored.is_admin());
}

#[test]
fn foreign_schema_version_restores_empty_session() {
    let raw = serde_json::json!({ "version": 99, "token": "abc123", "user": null }).to_string();
    let state = SessionState::from_snapshot(Some(&raw));
    assert!(state.restored);
    assert!(state.token.is_empty());
}

#[test]
fn garbage_snapshot_restores_empty_session() {
    let state = SessionState::from_snapshot(Some("{not json"));
    assert!(state.restored);
    assert!(!state.is_authenticated());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_unrestored_and_restore_reads_storage() {
    let raw = serde_json::to_string(&signed_in(Role::User).snapshot()).expect("encode");
    let storage = Arc::new(MemoryStorage::with_raw(raw));
    let store = store_with(&storage);

    assert!(!store.state_untracked().restored);
    store.restore();

    let state = store.state_untracked();
    assert!(state.restored);
    assert!(state.is_authenticated());
    assert_eq!(store.token(), "abc123");
}

#[test]
fn store_restore_from_empty_storage_is_anonymous() {
    let storage = Arc::new(MemoryStorage::default());
    let store = store_with(&storage);
    store.restore();
    assert!(store.state_untracked().restored);
    assert!(!store.state_untracked().is_authenticated());
    assert!(storage.raw().is_none());
}

#[test]
fn every_store_mutation_is_mirrored_to_storage() {
    let storage = Arc::new(MemoryStorage::default());
    let store = store_with(&storage);

    store.set_token("abc123");
    let persisted: PersistedSession = serde_json::from_str(&storage.raw().expect("saved")).expect("decode");
    assert_eq!(persisted.version, SESSION_SCHEMA_VERSION);
    assert_eq!(persisted.token, "abc123");
    assert!(persisted.user.is_none());

    store.set_user(user(7, Role::User));
    store.update_user_partial(&UserPatch { full_name: Some("Alice L".to_owned()), ..UserPatch::default() });
    let persisted: PersistedSession = serde_json::from_str(&storage.raw().expect("saved")).expect("decode");
    assert_eq!(persisted.user.and_then(|u| u.full_name).as_deref(), Some("Alice L"));

    store.logout();
    let persisted: PersistedSession = serde_json::from_str(&storage.raw().expect("saved")).expect("decode");
    assert!(persisted.token.is_empty());
    assert!(persisted.user.is_none());
}

#[test]
fn reload_after_mutation_restores_same_session() {
    let storage = Arc::new(MemoryStorage::default());
    let first = store_with(&storage);
    first.restore();
    first.set_token("abc123");
    first.set_user(user(7, Role::Admin));

    let second = store_with(&storage);
    second.restore();
    assert_eq!(second.token(), "abc123");
    assert!(second.state_untracked().is_admin());
}
