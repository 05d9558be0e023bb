#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::{Role, User};

/// localStorage key holding the serialized session record.
pub const STORAGE_KEY: &str = "authData";

/// Session lifetime from login: one hour.
pub const SESSION_TTL_MS: u64 = 60 * 60 * 1000;

/// The one browser-persisted record: bearer token plus the identity and
/// expiry needed to rebuild the in-memory user without a round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub email: String,
    pub role: Role,
    pub expires_at: u64,
}

impl Session {
    /// Build a fresh session expiring one hour from `now_ms`.
    pub fn new(token: String, email: String, role: Role, now_ms: u64) -> Self {
        Self {
            token,
            email,
            role,
            expires_at: now_ms + SESSION_TTL_MS,
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_at < now_ms
    }

    /// The in-memory user this session hydrates.
    pub fn user(&self) -> User {
        User::from_credentials(&self.email, self.role)
    }
}

/// Storage backing for the session record.
///
/// The browser implementation wraps localStorage; tests substitute an
/// in-memory store so load/save/expiry logic runs without a browser.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
    fn clear(&self);
}

/// Load the session record, discarding it if unreadable or expired.
///
/// Expiry is only ever checked here, on read: a session that outlives its
/// `expiresAt` mid-use keeps working until the next load.
pub fn load(store: &impl SessionStore, now_ms: u64) -> Option<Session> {
    let raw = store.get()?;
    let Ok(session) = serde_json::from_str::<Session>(&raw) else {
        store.clear();
        return None;
    };
    if session.is_expired(now_ms) {
        store.clear();
        return None;
    }
    Some(session)
}

/// Persist the session record.
pub fn save(store: &impl SessionStore, session: &Session) {
    if let Ok(raw) = serde_json::to_string(session) {
        store.set(&raw);
    }
}

/// Drop the session record.
pub fn clear(store: &impl SessionStore) {
    store.clear();
}

/// Bearer token from the current session, if one is stored and unexpired.
pub fn token() -> Option<String> {
    load(&BrowserStore, now_ms()).map(|s| s.token)
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Session store backed by the browser's localStorage. Inert outside the
/// browser build.
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
