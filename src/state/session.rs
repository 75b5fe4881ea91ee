//! Session state: the logged-in user's token pair and cached identity.
//!
//! DESIGN
//! ======
//! The source of truth is one `RwSignal<Option<Session>>` wrapped in a
//! `SessionStore` handle, mirrored to browser-local storage for
//! persistence across reloads. Every write goes through the store so the
//! access/refresh pair is updated as a single unit and is never observed
//! half-written. Subscribers (the navbar, page guards) read the signal;
//! the request layer reads untracked snapshots.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::AuthUser;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";
pub const USER_ID_KEY: &str = "user_id";

/// A logged-in user's access/refresh token pair and cached identity fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub username: String,
    pub email: String,
    pub user_id: String,
}

impl Session {
    /// Build a session from a login/register payload. Missing user fields
    /// are stored as empty strings rather than treated as fatal.
    pub fn from_login(access: &str, refresh: &str, user: Option<&AuthUser>) -> Self {
        Self {
            access: access.to_owned(),
            refresh: refresh.to_owned(),
            username: user
                .and_then(|u| u.username.clone())
                .unwrap_or_default(),
            email: user.and_then(|u| u.email.clone()).unwrap_or_default(),
            user_id: user
                .and_then(|u| u.id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn has_access_token(&self) -> bool {
        !self.access.is_empty()
    }
}

/// Username sent to the token endpoint: the cached username when one
/// exists, otherwise the local part of the email address.
pub fn login_username(stored: Option<&str>, email: &str) -> String {
    match stored.filter(|s| !s.is_empty()) {
        Some(stored) => stored.to_owned(),
        None => email.split('@').next().unwrap_or(email).to_owned(),
    }
}

/// Shared session store: one reactive signal plus persistent storage.
#[derive(Clone, Copy)]
pub struct SessionStore {
    inner: RwSignal<Option<Session>>,
}

impl SessionStore {
    /// Load any persisted session from browser storage.
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(read_storage()),
        }
    }

    /// Reactive read; subscribes the caller to session changes.
    pub fn get(&self) -> Option<Session> {
        self.inner.get()
    }

    /// Untracked read for the request layer and event handlers.
    pub fn snapshot(&self) -> Option<Session> {
        self.inner.get_untracked()
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some_and(|s| s.has_access_token())
    }

    pub fn username(&self) -> Option<String> {
        self.snapshot()
            .map(|s| s.username)
            .filter(|u| !u.is_empty())
    }

    pub fn access_token(&self) -> Option<String> {
        self.snapshot()
            .map(|s| s.access)
            .filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.snapshot()
            .map(|s| s.refresh)
            .filter(|t| !t.is_empty())
    }

    /// Replace the whole session (login/register). Storage is written
    /// before the signal updates so subscribers only ever observe a fully
    /// persisted session.
    pub fn establish(&self, session: Session) {
        write_storage(&session);
        self.inner.set(Some(session));
    }

    /// Rotate the access token after a refresh, keeping everything else.
    pub fn set_access_token(&self, access: &str) {
        self.inner.update(|current| {
            if let Some(session) = current.as_mut() {
                session.access = access.to_owned();
                write_storage(session);
            }
        });
    }

    /// Drop the token pair but keep cached identity fields. Used when a
    /// refresh attempt fails and the stored tokens are known bad.
    pub fn clear_tokens(&self) {
        remove_keys(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]);
        self.inner.update(|current| {
            if let Some(session) = current.as_mut() {
                session.access.clear();
                session.refresh.clear();
            }
        });
    }

    /// Destroy the session entirely (logout).
    pub fn clear(&self) {
        remove_keys(&[
            ACCESS_TOKEN_KEY,
            REFRESH_TOKEN_KEY,
            USERNAME_KEY,
            EMAIL_KEY,
            USER_ID_KEY,
        ]);
        self.inner.set(None);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a persisted session. Returns `None` outside the browser or when
/// no token has ever been stored.
fn read_storage() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let get = |key: &str| storage.get_item(key).ok().flatten().unwrap_or_default();
        let session = Session {
            access: get(ACCESS_TOKEN_KEY),
            refresh: get(REFRESH_TOKEN_KEY),
            username: get(USERNAME_KEY),
            email: get(EMAIL_KEY),
            user_id: get(USER_ID_KEY),
        };
        if session.access.is_empty() && session.refresh.is_empty() {
            None
        } else {
            Some(session)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn write_storage(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &session.access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &session.refresh);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
            let _ = storage.set_item(EMAIL_KEY, &session.email);
            let _ = storage.set_item(USER_ID_KEY, &session.user_id);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

fn remove_keys(keys: &[&str]) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            for key in keys {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = keys;
    }
}
