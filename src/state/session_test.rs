use std::cell::RefCell;

use super::*;
use crate::state::auth::Role;

/// In-memory stand-in for localStorage.
#[derive(Default)]
struct MemoryStore(RefCell<Option<String>>);

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

fn session(now_ms: u64) -> Session {
    Session::new(
        "tok-123".to_owned(),
        "jane@corp.test".to_owned(),
        Role::Admin,
        now_ms,
    )
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn new_session_expires_one_hour_out() {
    let s = session(1_000);
    assert_eq!(s.expires_at, 1_000 + 60 * 60 * 1000);
}

#[test]
fn session_not_expired_before_deadline() {
    let s = session(1_000);
    assert!(!s.is_expired(1_000));
    assert!(!s.is_expired(s.expires_at));
}

#[test]
fn session_expired_after_deadline() {
    let s = session(1_000);
    assert!(s.is_expired(s.expires_at + 1));
}

// =============================================================
// Load / save / clear
// =============================================================

#[test]
fn load_returns_nothing_from_empty_store() {
    let store = MemoryStore::default();
    assert_eq!(load(&store, 0), None);
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    let s = session(1_000);
    save(&store, &s);
    assert_eq!(load(&store, 2_000), Some(s));
}

#[test]
fn load_discards_expired_session_and_clears_store() {
    let store = MemoryStore::default();
    let s = session(1_000);
    save(&store, &s);
    assert_eq!(load(&store, s.expires_at + 1), None);
    // The stale record is gone, not just skipped.
    assert_eq!(store.get(), None);
}

#[test]
fn load_discards_malformed_record() {
    let store = MemoryStore::default();
    store.set("not json");
    assert_eq!(load(&store, 0), None);
    assert_eq!(store.get(), None);
}

#[test]
fn clear_removes_the_record() {
    let store = MemoryStore::default();
    save(&store, &session(1_000));
    clear(&store);
    assert_eq!(store.get(), None);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn serializes_with_camel_case_expiry_and_uppercase_role() {
    let raw = serde_json::to_string(&session(1_000)).unwrap();
    assert!(raw.contains("\"expiresAt\""));
    assert!(raw.contains("\"ADMIN\""));
}

#[test]
fn parses_record_written_by_the_previous_frontend() {
    let raw = r#"{"token":"t","email":"a@b.test","role":"EMPLOYEE","expiresAt":123}"#;
    let s: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(s.token, "t");
    assert_eq!(s.role, Role::Employee);
    assert_eq!(s.expires_at, 123);
}

// =============================================================
// User hydration
// =============================================================

#[test]
fn session_user_derives_identity_from_email() {
    let user = session(0).user();
    assert_eq!(user.id, "jane@corp.test");
    assert_eq!(user.name, "jane");
    assert_eq!(user.role, Role::Admin);
}
