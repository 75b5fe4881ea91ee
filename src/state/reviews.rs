//! Review rules shared by the book and movie detail pages.
//!
//! The backend enforces the one-review-per-user-per-media constraint; the
//! checks here are best-effort gates that reject doomed submissions before
//! any network call is made.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use crate::net::types::{MediaKind, Review};
use crate::state::session::Session;

/// Identity fields used to match a review against the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewerIdentity {
    pub username: Option<String>,
    pub user_id: Option<i64>,
}

impl ReviewerIdentity {
    pub fn from_session(session: &Session) -> Self {
        Self {
            username: Some(session.username.clone()).filter(|u| !u.is_empty()),
            user_id: session.user_id.parse().ok(),
        }
    }
}

/// Whether `reviews` already contains one by this user for this media
/// item. Matches on username or numeric user id; reviews without a media
/// field are assumed to belong to the page they were fetched for.
pub fn has_existing_review(reviews: &[Review], identity: &ReviewerIdentity, media_id: i64) -> bool {
    reviews.iter().any(|review| {
        let same_media = review.media.is_none() || review.media == Some(media_id);
        let same_user = (identity.username.is_some()
            && review.username == identity.username)
            || (identity.user_id.is_some() && review.user == identity.user_id);
        same_media && same_user
    })
}

/// Fixed user-facing message for the backend's uniqueness violation.
pub fn duplicate_review_message(kind: MediaKind) -> String {
    let noun = kind.noun();
    format!(
        "You have already submitted a review for this {noun}. \
         You can only submit one review per {noun}."
    )
}

/// Date portion of an ISO-8601 `created_at` timestamp.
pub fn format_review_date(created_at: &str) -> &str {
    created_at.split('T').next().unwrap_or(created_at)
}
