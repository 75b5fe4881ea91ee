//! Latest-media pages: curated feeds with search, genre filter, and
//! pagination, unified behind one view for books and movies.

use leptos::prelude::*;

use crate::components::media_card::CoverCard;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::collection::{MediaCard, PAGE_SIZE, Pager, genre_options, page_slice};
use crate::state::session::SessionStore;

#[component]
pub fn LatestBooksPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cards = LocalResource::new(move || async move {
        api::fetch_latest_books(session)
            .await
            .map(|books| books.iter().map(MediaCard::from_book).collect::<Vec<_>>())
    });

    view! {
        <LatestMediaView
            heading="Latest Books"
            noun="books"
            back_href="/books"
            back_label="Back to All Books"
            cards=cards
        />
    }
}

#[component]
pub fn LatestMoviesPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cards = LocalResource::new(move || async move {
        api::fetch_latest_movies(session)
            .await
            .map(|movies| movies.iter().map(MediaCard::from_movie).collect::<Vec<_>>())
    });

    view! {
        <LatestMediaView
            heading="Latest Movies"
            noun="movies"
            back_href="/movies"
            back_label="Back to All Movies"
            cards=cards
        />
    }
}

#[component]
fn LatestMediaView(
    heading: &'static str,
    noun: &'static str,
    back_href: &'static str,
    back_label: &'static str,
    cards: LocalResource<Result<Vec<MediaCard>, ApiError>>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);

    // Filtered view of the fetched collection; empty until the fetch lands.
    let filtered = Signal::derive(move || {
        let Some(Ok(all)) = cards.get() else {
            return Vec::new();
        };
        let search = search.get();
        let genre = genre.get();
        all.into_iter()
            .filter(|card| card.matches(&search, &genre))
            .collect::<Vec<_>>()
    });

    let pager = Signal::derive(move || Pager::new(page.get(), filtered.get().len(), PAGE_SIZE));
    let total_pages = Signal::derive(move || pager.get().total_pages());

    let genres = Signal::derive(move || match cards.get() {
        Some(Ok(all)) => genre_options(&all),
        _ => Vec::new(),
    });

    let on_search_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
    };

    view! {
        <div class="latest-page">
            <h1>{heading}</h1>

            <a href=back_href class="latest-page__back">
                {back_label}
            </a>

            <div class="latest-page__controls">
                <form class="search-box" on:submit=on_search_submit>
                    <input
                        type="text"
                        placeholder=format!("Search {noun}...")
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            search.set(event_target_value(&ev));
                            page.set(1);
                        }
                    />
                    <button type="submit">"Search"</button>
                </form>

                <div class="filter-dropdown">
                    <select
                        prop:value=move || genre.get()
                        on:change=move |ev| {
                            genre.set(event_target_value(&ev));
                            page.set(1);
                        }
                    >
                        <option value="">"All Genres"</option>
                        {move || {
                            genres
                                .get()
                                .into_iter()
                                .map(|g| {
                                    let label = g.clone();
                                    view! { <option value=g>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </div>

            <Suspense fallback=move || {
                view! { <div class="loading">{format!("Loading {noun}...")}</div> }
            }>
                {move || {
                    cards
                        .get()
                        .map(|result| match result {
                            Ok(_) => {
                                view! {
                                    <div class="latest-page__body">
                                    <div class="latest-page__results">
                                        {move || {
                                            let items = filtered.get();
                                            let current = page_slice(&items, &pager.get());
                                            format!(
                                                "Showing {} of {} {noun}",
                                                current.len(),
                                                items.len(),
                                            )
                                        }}
                                    </div>

                                    <div class="latest-page__grid">
                                        {move || {
                                            let items = filtered.get();
                                            let current = page_slice(&items, &pager.get());
                                            if current.is_empty() {
                                                view! {
                                                    <div class="no-results">
                                                        {format!("No {noun} found matching your criteria")}
                                                    </div>
                                                }
                                                    .into_any()
                                            } else {
                                                current
                                                    .iter()
                                                    .cloned()
                                                    .map(|card| view! { <CoverCard card=card/> })
                                                    .collect::<Vec<_>>()
                                                    .into_any()
                                            }
                                        }}
                                    </div>

                                    <Pagination page=page total_pages=total_pages/>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-message">
                                        {format!("Failed to load {noun}: {err}")}
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
