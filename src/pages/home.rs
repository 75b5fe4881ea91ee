//! Landing page with a hero, feature cards, and the backend status probe.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    // Liveness probe on mount.
    let status = LocalResource::new(move || api::fetch_status(session));

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"Chaptered"</h1>
                <p class="home-page__subtitle">
                    "Discover, summarize, and review books & movies"
                </p>
            </div>

            <div class="home-page__features">
                <div class="feature-card">
                    <h2>"Browse"</h2>
                    <p>"Explore our extensive collection of books and movies"</p>
                </div>
                <div class="feature-card">
                    <h2>"Review"</h2>
                    <p>"Share your thoughts and read what others think"</p>
                </div>
                <div class="feature-card">
                    <h2>"Save"</h2>
                    <p>"Create your personal collections and wishlists"</p>
                </div>
            </div>

            <div class="home-page__status">
                <Suspense fallback=move || {
                    view! { <p class="status-loading">"Connecting to API..."</p> }
                }>
                    {move || {
                        status
                            .get()
                            .map(|result| match result {
                                Ok(api) if api.is_running() => {
                                    view! {
                                        <p class="status-ok">
                                            {format!("Connected to {} v{}", api.api_name, api.version)}
                                        </p>
                                    }
                                        .into_any()
                                }
                                Ok(api) => {
                                    view! {
                                        <p class="status-error">
                                            {format!("API reported status: {}", api.status)}
                                        </p>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="status-error">
                                            {format!("API connection error: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
