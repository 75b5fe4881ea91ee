//! Catalog listing pages for books and movies.
//!
//! Both pages are thin wrappers over one `MediaBrowser`: fetch the full
//! collection on mount, then render loading/error/empty states and a card
//! grid.

use leptos::prelude::*;

use crate::components::media_card::SummaryCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::collection::MediaCard;
use crate::state::session::SessionStore;

#[component]
pub fn BooksPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cards = LocalResource::new(move || async move {
        api::fetch_books(session)
            .await
            .map(|books| books.iter().map(MediaCard::from_book).collect::<Vec<_>>())
    });

    view! { <MediaBrowser heading="Explore Books" noun="books" cards=cards/> }
}

#[component]
pub fn MoviesPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cards = LocalResource::new(move || async move {
        api::fetch_movies(session)
            .await
            .map(|movies| movies.iter().map(MediaCard::from_movie).collect::<Vec<_>>())
    });

    view! { <MediaBrowser heading="Explore Movies" noun="movies" cards=cards/> }
}

#[component]
fn MediaBrowser(
    heading: &'static str,
    noun: &'static str,
    cards: LocalResource<Result<Vec<MediaCard>, ApiError>>,
) -> impl IntoView {
    view! {
        <div class="browse-page">
            <h1>{heading}</h1>

            <Suspense fallback=move || {
                view! { <div class="loading">{format!("Loading {noun}...")}</div> }
            }>
                {move || {
                    cards
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="no-results">{format!("No {noun} found")}</div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="browse-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|card| view! { <SummaryCard card=card/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-message">
                                        {format!(
                                            "Failed to load {noun}: {}",
                                            err.user_message(&err.to_string()),
                                        )}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
