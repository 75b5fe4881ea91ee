use super::*;

// =============================================================
// Public endpoint scoping
// =============================================================

#[test]
fn catalog_routes_are_public() {
    assert!(is_public_endpoint("/api/books/", Method::Get));
    assert!(is_public_endpoint("/api/books/42/", Method::Get));
    assert!(is_public_endpoint("/api/movies/", Method::Get));
    assert!(is_public_endpoint("/api/movies/7/", Method::Get));
}

#[test]
fn auth_entry_routes_are_public() {
    assert!(is_public_endpoint("/api/auth/register/", Method::Post));
    assert!(is_public_endpoint("/api/auth/token/", Method::Post));
    assert!(is_public_endpoint("/api/auth/token/refresh/", Method::Post));
}

#[test]
fn reviews_and_profiles_are_not_public() {
    assert!(!is_public_endpoint("/api/reviews/", Method::Get));
    assert!(!is_public_endpoint("/api/reviews/?book_id=3", Method::Post));
    assert!(!is_public_endpoint("/api/profiles/", Method::Get));
    assert!(!is_public_endpoint("/api/auth/password/change/", Method::Post));
    assert!(!is_public_endpoint("/", Method::Get));
}

#[test]
fn public_prefixes_only_cover_get_and_post() {
    assert!(!is_public_endpoint("/api/books/42/", Method::Put));
    assert!(!is_public_endpoint("/api/books/42/", Method::Delete));
    assert!(!is_public_endpoint("/api/movies/7/", Method::Patch));
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

// =============================================================
// Refresh decision — exactly one attempt, only with a refresh token
// =============================================================

#[test]
fn refresh_on_first_401_with_refresh_token() {
    assert!(should_refresh(401, false, true));
}

#[test]
fn no_refresh_without_refresh_token() {
    assert!(!should_refresh(401, false, false));
}

#[test]
fn no_second_refresh_after_retry() {
    assert!(!should_refresh(401, true, true));
}

#[test]
fn no_refresh_for_other_statuses() {
    assert!(!should_refresh(400, false, true));
    assert!(!should_refresh(403, false, true));
    assert!(!should_refresh(500, false, true));
}
