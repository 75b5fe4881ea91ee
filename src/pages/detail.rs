//! Detail pages for a single book or movie, with its reviews.
//!
//! The primary fetch and the reviews fetch are independent in-flight
//! requests; whichever reviews response completes last wins the list,
//! matching the source behavior (no request sequencing is imposed).
//! A reviews fetch failure degrades to an empty list; a primary fetch
//! failure shows an error panel and no review form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::review_section::ReviewSection;
use crate::components::star_icon::StarIcon;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::MediaKind;
use crate::state::collection::MediaDetail;
use crate::state::session::SessionStore;

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    let detail = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => api::fetch_book(session, id).await.map(|b| MediaDetail::from_book(&b)),
                None => Err(ApiError::Unavailable),
            }
        }
    });
    let reviews = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => api::fetch_reviews(session, MediaKind::Book, id)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <DetailView
            kind=MediaKind::Book
            back_href="/books"
            back_label="Back to Books"
            media_id=Signal::derive(id)
            detail=detail
            reviews=reviews
        />
    }
}

#[component]
pub fn MovieDetailPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    let detail = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => api::fetch_movie(session, id)
                    .await
                    .map(|m| MediaDetail::from_movie(&m)),
                None => Err(ApiError::Unavailable),
            }
        }
    });
    let reviews = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => api::fetch_reviews(session, MediaKind::Movie, id)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <DetailView
            kind=MediaKind::Movie
            back_href="/movies"
            back_label="Back to Movies"
            media_id=Signal::derive(id)
            detail=detail
            reviews=reviews
        />
    }
}

#[component]
fn DetailView(
    kind: MediaKind,
    back_href: &'static str,
    back_label: &'static str,
    media_id: Signal<Option<i64>>,
    detail: LocalResource<Result<MediaDetail, ApiError>>,
    reviews: LocalResource<Vec<crate::net::types::Review>>,
) -> impl IntoView {
    let noun = kind.noun();

    view! {
        <div class="detail-page">
            <a class="detail-page__back" href=back_href>
                "\u{2190} " {back_label}
            </a>

            <Suspense fallback=move || {
                view! { <div class="loading">{format!("Loading {noun} details...")}</div> }
            }>
                {move || {
                    let id = media_id.get();
                    detail
                        .get()
                        .map(|result| match (id, result) {
                            (Some(id), Ok(media)) => {
                                view! {
                                    <div class="detail-page__content">
                                        <DetailHeader media=media/>
                                        <ReviewSection kind=kind media_id=id reviews=reviews/>
                                    </div>
                                }
                                    .into_any()
                            }
                            (_, Err(err)) if err.is_not_found() => {
                                view! {
                                    <div class="error-message">
                                        {format!("{} not found", capitalize(noun))}
                                    </div>
                                }
                                    .into_any()
                            }
                            (None, _) => {
                                view! {
                                    <div class="error-message">
                                        {format!("{} not found", capitalize(noun))}
                                    </div>
                                }
                                    .into_any()
                            }
                            (_, Err(_)) => {
                                view! {
                                    <div class="error-message">
                                        {format!("Failed to load {noun} details. Please try again.")}
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

/// Cover/poster, title, byline, and metadata row.
#[component]
fn DetailHeader(media: MediaDetail) -> impl IntoView {
    let cover = match media.cover_url.clone() {
        Some(url) => view! { <img src=url alt=media.title.clone()/> }.into_any(),
        None => view! {
            <div class="detail-page__tile">
                <span>{media.initial()}</span>
            </div>
        }
            .into_any(),
    };

    view! {
        <div class="detail-page__header">
            <div class="detail-page__cover">{cover}</div>

            <div class="detail-page__info">
                <h1>{media.title.clone()}</h1>
                {media
                    .byline
                    .clone()
                    .map(|b| view! { <p class="detail-page__byline">"by " {b}</p> })}

                <div class="detail-page__metadata">
                    {media
                        .published
                        .clone()
                        .map(|p| {
                            view! {
                                <span class="metadata-item">"Published: " {p}</span>
                            }
                        })}
                    {media
                        .genre
                        .clone()
                        .map(|g| {
                            view! { <span class="metadata-item">"Genres: " {g}</span> }
                        })}
                    {media
                        .rating
                        .map(|r| {
                            view! {
                                <span class="metadata-item metadata-item--rating">
                                    <StarIcon/>
                                    {format!("{r:.1}")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </div>

        {media
            .description
            .clone()
            .map(|text| {
                view! {
                    <section class="detail-page__description">
                        <h2>"Description"</h2>
                        <p>{text}</p>
                    </section>
                }
            })}
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
