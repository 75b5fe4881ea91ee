use super::*;

fn status_error(status: u16, body: serde_json::Value) -> ApiError {
    ApiError::Status { status, body }
}

// =============================================================
// detail / user_message
// =============================================================

#[test]
fn detail_reads_body_field() {
    let err = status_error(401, serde_json::json!({"detail": "Invalid credentials"}));
    assert_eq!(err.detail().as_deref(), Some("Invalid credentials"));
    assert_eq!(err.user_message("fallback"), "Invalid credentials");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = status_error(500, serde_json::Value::Null);
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message("fallback"), "fallback");

    assert_eq!(ApiError::Network("boom".to_owned()).user_message("fb"), "fb");
}

// =============================================================
// field_errors
// =============================================================

#[test]
fn field_errors_join_arrays() {
    let err = status_error(
        400,
        serde_json::json!({
            "email": ["Enter a valid email address.", "This field is required."],
            "username": "taken"
        }),
    );
    let errors = err.field_errors();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&(
        "email".to_owned(),
        "Enter a valid email address., This field is required.".to_owned()
    )));
    assert!(errors.contains(&("username".to_owned(), "taken".to_owned())));
}

#[test]
fn field_errors_empty_for_non_object_bodies() {
    assert!(status_error(400, serde_json::json!("bad")).field_errors().is_empty());
    assert!(ApiError::Unavailable.field_errors().is_empty());
}

// =============================================================
// duplicate review detection
// =============================================================

#[test]
fn duplicate_review_detected_from_unique_set_violation() {
    let err = status_error(
        400,
        serde_json::json!({
            "non_field_errors": ["The fields user, media must make a unique set."]
        }),
    );
    assert!(err.is_duplicate_review());
}

#[test]
fn duplicate_review_requires_400_status() {
    let err = status_error(
        409,
        serde_json::json!({
            "non_field_errors": ["The fields user, media must make a unique set."]
        }),
    );
    assert!(!err.is_duplicate_review());
}

#[test]
fn other_400s_are_not_duplicates() {
    let err = status_error(400, serde_json::json!({"rating": ["Required."]}));
    assert!(!err.is_duplicate_review());
}

// =============================================================
// status helpers
// =============================================================

#[test]
fn status_helpers() {
    assert!(status_error(401, serde_json::Value::Null).is_unauthorized());
    assert!(status_error(404, serde_json::Value::Null).is_not_found());
    assert!(!ApiError::Decode("x".to_owned()).is_unauthorized());
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
}

#[test]
fn display_formats_are_stable() {
    assert_eq!(
        status_error(503, serde_json::Value::Null).to_string(),
        "request failed: 503"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
