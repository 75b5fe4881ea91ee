use super::*;
use crate::net::types::Review;
use crate::state::session::Session;

fn review(id: i64, user: Option<i64>, username: Option<&str>, media: Option<i64>) -> Review {
    Review {
        id,
        user,
        username: username.map(str::to_owned),
        media,
        rating: 4,
        review_text: "solid".to_owned(),
        created_at: Some("2025-03-01T10:22:00Z".to_owned()),
    }
}

fn bob() -> ReviewerIdentity {
    ReviewerIdentity {
        username: Some("bob".to_owned()),
        user_id: Some(7),
    }
}

// =============================================================
// has_existing_review
// =============================================================

#[test]
fn matches_by_username() {
    let reviews = [review(1, None, Some("bob"), Some(3))];
    assert!(has_existing_review(&reviews, &bob(), 3));
}

#[test]
fn matches_by_user_id() {
    let reviews = [review(1, Some(7), None, Some(3))];
    assert!(has_existing_review(&reviews, &bob(), 3));
}

#[test]
fn no_match_for_other_users() {
    let reviews = [review(1, Some(8), Some("carol"), Some(3))];
    assert!(!has_existing_review(&reviews, &bob(), 3));
}

#[test]
fn no_match_for_other_media() {
    let reviews = [review(1, Some(7), Some("bob"), Some(4))];
    assert!(!has_existing_review(&reviews, &bob(), 3));
}

#[test]
fn review_without_media_field_counts_for_the_page() {
    // Reviews come back already filtered by media id; a payload without
    // the field still belongs to this page.
    let reviews = [review(1, Some(7), None, None)];
    assert!(has_existing_review(&reviews, &bob(), 3));
}

#[test]
fn empty_identity_never_matches() {
    let reviews = [review(1, None, None, Some(3))];
    let anonymous = ReviewerIdentity::default();
    assert!(!has_existing_review(&reviews, &anonymous, 3));
}

#[test]
fn empty_review_list_never_matches() {
    assert!(!has_existing_review(&[], &bob(), 3));
}

// =============================================================
// ReviewerIdentity::from_session
// =============================================================

#[test]
fn identity_from_full_session() {
    let session = Session {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        user_id: "7".to_owned(),
    };
    let identity = ReviewerIdentity::from_session(&session);
    assert_eq!(identity.username.as_deref(), Some("bob"));
    assert_eq!(identity.user_id, Some(7));
}

#[test]
fn identity_from_sparse_session() {
    let identity = ReviewerIdentity::from_session(&Session::default());
    assert_eq!(identity.username, None);
    assert_eq!(identity.user_id, None);
}

// =============================================================
// Messages and formatting
// =============================================================

#[test]
fn duplicate_message_names_the_media_kind() {
    let msg = duplicate_review_message(MediaKind::Book);
    assert!(msg.contains("review for this book"));
    assert!(msg.contains("one review per book"));

    let msg = duplicate_review_message(MediaKind::Movie);
    assert!(msg.contains("one review per movie"));
}

#[test]
fn review_date_takes_date_portion() {
    assert_eq!(format_review_date("2025-03-01T10:22:00Z"), "2025-03-01");
    assert_eq!(format_review_date("2025-03-01"), "2025-03-01");
}
