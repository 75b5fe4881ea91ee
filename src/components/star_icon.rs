//! Small filled-star icon used next to ratings.

use leptos::prelude::*;

/// A 14px filled star.
#[component]
pub fn StarIcon() -> impl IntoView {
    view! {
        <svg class="star-icon" width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"></path>
        </svg>
    }
}
