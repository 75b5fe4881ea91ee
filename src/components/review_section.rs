//! Review form and review list shared by the detail pages.

use leptos::prelude::*;

use crate::components::star_icon::StarIcon;
use crate::net::types::{MediaKind, Review};
use crate::state::reviews::{
    ReviewerIdentity, duplicate_review_message, format_review_date, has_existing_review,
};
use crate::state::session::{Session, SessionStore};

/// Reviews section: a submission form gated on session presence plus the
/// fetched review list. Logged-out, empty-text, and locally-detected
/// duplicate submissions are rejected before any network call.
#[component]
pub fn ReviewSection(
    kind: MediaKind,
    media_id: i64,
    reviews: LocalResource<Vec<Review>>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let rating = RwSignal::new(5u8);
    let text = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(String::new());

        let Some(current) = session.snapshot().filter(Session::has_access_token) else {
            form_error.set("You must be logged in to submit a review.".to_owned());
            return;
        };
        if text.get_untracked().trim().is_empty() {
            form_error.set("Review text cannot be empty.".to_owned());
            return;
        }

        let identity = ReviewerIdentity::from_session(&current);
        let existing = reviews.get_untracked().unwrap_or_default();
        if has_existing_review(&existing, &identity, media_id) {
            form_error.set(duplicate_review_message(kind));
            return;
        }

        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let body = text.get_untracked().trim().to_owned();
                match crate::net::api::create_review(
                    session,
                    media_id,
                    rating.get_untracked(),
                    &body,
                )
                .await
                {
                    Ok(_) => {
                        text.set(String::new());
                        rating.set(5);
                        reviews.refetch();
                    }
                    Err(err) if err.is_duplicate_review() => {
                        form_error.set(duplicate_review_message(kind));
                    }
                    Err(err) => {
                        leptos::logging::warn!("review submission failed: {err}");
                        form_error.set("Failed to submit review. Please try again.".to_owned());
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            submitting.set(false);
        }
    };

    let noun = kind.noun();

    view! {
        <section class="reviews-section">
            <h2>"Reviews"</h2>

            <Show
                when=move || session.is_logged_in()
                fallback=|| {
                    view! {
                        <div class="login-prompt">
                            <p>"Please " <a href="/login">"log in"</a> " to leave a review."</p>
                        </div>
                    }
                }
            >
                <form class="review-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="rating">"Rating:"</label>
                        <select
                            id="rating"
                            prop:value=move || rating.get().to_string()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                    rating.set(value);
                                }
                            }
                        >
                            <option value="5">"5 - Excellent"</option>
                            <option value="4">"4 - Very Good"</option>
                            <option value="3">"3 - Good"</option>
                            <option value="2">"2 - Fair"</option>
                            <option value="1">"1 - Poor"</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="review">"Your Review:"</label>
                        <textarea
                            id="review"
                            rows="4"
                            placeholder=format!("Share your thoughts about this {noun}...")
                            prop:value=move || text.get()
                            on:input=move |ev| text.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <Show when=move || !form_error.get().is_empty()>
                        <p class="error-message">{move || form_error.get()}</p>
                    </Show>

                    <button type="submit" class="submit-review" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </form>
            </Show>

            <div class="reviews-list">
                {move || {
                    let list = reviews.get().unwrap_or_default();
                    if list.is_empty() {
                        view! {
                            <p class="no-reviews">
                                {format!("No reviews yet. Be the first to review this {noun}!")}
                            </p>
                        }
                            .into_any()
                    } else {
                        list.into_iter()
                            .map(|review| view! { <ReviewCard review=review/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// A single fetched review.
#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let name = review
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "Anonymous".to_owned());
    let date = review
        .created_at
        .as_deref()
        .map(|d| format_review_date(d).to_owned());
    let stars = (0..review.rating)
        .map(|_| view! { <StarIcon/> })
        .collect::<Vec<_>>();

    view! {
        <div class="review-card">
            <div class="review-card__header">
                <span class="review-card__name">{name}</span>
                <span class="review-card__rating">{stars}</span>
                {date.map(|d| view! { <span class="review-card__date">{d}</span> })}
            </div>
            <p class="review-card__text">{review.review_text.clone()}</p>
        </div>
    }
}
