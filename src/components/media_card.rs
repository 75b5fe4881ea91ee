//! Card components for the media grids.

use leptos::prelude::*;

use crate::components::star_icon::StarIcon;
use crate::state::collection::MediaCard;

/// Text-first card on the catalog pages: title, rating, byline, genre and
/// year, summary, and a link to the detail page.
#[component]
pub fn SummaryCard(card: MediaCard) -> impl IntoView {
    let href = card.detail_href();
    let byline = card.byline.clone();
    let meta = match (card.genre.clone(), card.year) {
        (Some(genre), Some(year)) => Some(format!("{genre} \u{2022} {year}")),
        (Some(genre), None) => Some(genre),
        (None, Some(year)) => Some(year.to_string()),
        (None, None) => None,
    };

    view! {
        <div class="media-card">
            <div class="media-card__header">
                <h2>{card.title.clone()}</h2>
                {card
                    .rating
                    .map(|rating| {
                        view! {
                            <div class="media-card__rating">
                                {format!("{rating:.1}")} <StarIcon/>
                            </div>
                        }
                    })}
            </div>
            {byline.map(|b| view! { <div class="media-card__byline">{b}</div> })}
            {meta.map(|m| view! { <div class="media-card__meta">{m}</div> })}
            {card
                .summary
                .clone()
                .map(|s| view! { <p class="media-card__summary">{s}</p> })}
            <div class="media-card__actions">
                <a class="btn btn--primary" href=href>
                    "Read Reviews"
                </a>
            </div>
        </div>
    }
}

/// Cover-art card on the latest-media grids. Falls back to a colored
/// letter tile when the item has no cover image.
#[component]
pub fn CoverCard(card: MediaCard) -> impl IntoView {
    let href = card.detail_href();
    let cover = match card.cover_url.clone() {
        Some(url) => view! { <img src=url alt=card.title.clone()/> }.into_any(),
        None => {
            let color = card.fallback_color();
            view! {
                <div class="cover-card__tile" style:background-color=color>
                    <span>{card.initial()}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <a class="cover-card" href=href>
            <div class="cover-card__cover">{cover}</div>
            <div class="cover-card__info">
                <h3 class="cover-card__title">{card.title.clone()}</h3>
                {card
                    .byline
                    .clone()
                    .map(|b| view! { <p class="cover-card__byline">{b}</p> })}
                {card
                    .rating
                    .map(|rating| {
                        view! {
                            <div class="cover-card__rating">
                                <StarIcon/> {format!("{rating:.1}")}
                            </div>
                        }
                    })}
            </div>
        </a>
    }
}
