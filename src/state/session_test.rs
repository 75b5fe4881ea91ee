use super::*;
use crate::net::types::AuthUser;

fn bob() -> AuthUser {
    AuthUser {
        id: Some(7),
        username: Some("bob".to_owned()),
        email: Some("b@x.com".to_owned()),
    }
}

// =============================================================
// Session::from_login
// =============================================================

#[test]
fn from_login_stores_all_fields() {
    let session = Session::from_login("a", "r", Some(&bob()));
    assert_eq!(session.access, "a");
    assert_eq!(session.refresh, "r");
    assert_eq!(session.username, "bob");
    assert_eq!(session.email, "b@x.com");
    assert_eq!(session.user_id, "7");
}

#[test]
fn from_login_tolerates_missing_user() {
    let session = Session::from_login("a", "r", None);
    assert_eq!(session.access, "a");
    assert_eq!(session.username, "");
    assert_eq!(session.email, "");
    assert_eq!(session.user_id, "");
}

#[test]
fn from_login_tolerates_partial_user() {
    let user = AuthUser {
        id: None,
        username: Some("bob".to_owned()),
        email: None,
    };
    let session = Session::from_login("a", "", Some(&user));
    assert_eq!(session.username, "bob");
    assert_eq!(session.email, "");
    assert_eq!(session.user_id, "");
}

#[test]
fn has_access_token_checks_emptiness() {
    assert!(Session::from_login("a", "", None).has_access_token());
    assert!(!Session::default().has_access_token());
}

// =============================================================
// login_username
// =============================================================

#[test]
fn login_username_prefers_stored_name() {
    assert_eq!(login_username(Some("bob"), "b@x.com"), "bob");
}

#[test]
fn login_username_derives_from_email() {
    assert_eq!(login_username(None, "carol@example.com"), "carol");
    assert_eq!(login_username(Some(""), "carol@example.com"), "carol");
}

#[test]
fn login_username_without_at_sign_passes_through() {
    assert_eq!(login_username(None, "plainname"), "plainname");
}

// =============================================================
// SessionStore — atomic updates through the signal
// =============================================================

#[test]
fn store_starts_empty_outside_browser() {
    let store = SessionStore::new();
    assert!(store.snapshot().is_none());
    assert!(!store.is_logged_in());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn establish_makes_session_visible() {
    let store = SessionStore::new();
    store.establish(Session::from_login("a", "r", Some(&bob())));
    assert_eq!(store.access_token().as_deref(), Some("a"));
    assert_eq!(store.refresh_token().as_deref(), Some("r"));
    assert_eq!(store.username().as_deref(), Some("bob"));
}

#[test]
fn set_access_token_keeps_other_fields() {
    let store = SessionStore::new();
    store.establish(Session::from_login("a", "r", Some(&bob())));
    store.set_access_token("a2");
    let session = store.snapshot().expect("session");
    assert_eq!(session.access, "a2");
    assert_eq!(session.refresh, "r");
    assert_eq!(session.username, "bob");
}

#[test]
fn clear_tokens_keeps_identity() {
    let store = SessionStore::new();
    store.establish(Session::from_login("a", "r", Some(&bob())));
    store.clear_tokens();
    let session = store.snapshot().expect("session");
    assert!(session.access.is_empty());
    assert!(session.refresh.is_empty());
    assert_eq!(session.username, "bob");
    assert!(!store.is_logged_in());
}

#[test]
fn clear_destroys_session() {
    let store = SessionStore::new();
    store.establish(Session::from_login("a", "r", Some(&bob())));
    store.clear();
    assert!(store.snapshot().is_none());
}
