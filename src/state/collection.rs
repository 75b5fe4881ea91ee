//! Shared model behind the paginated media listings.
//!
//! Books and movies normalize to `MediaCard`/`MediaDetail` so one set of
//! view components serves both, and the search/genre filtering and
//! pagination math lives here where it can be tested without a browser.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::types::{Book, MediaKind, Movie};

/// Items shown per page on the latest-media grids.
pub const PAGE_SIZE: usize = 24;

/// Page-number buttons shown flat before switching to the windowed strip.
const FLAT_PAGE_LIMIT: usize = 7;

/// Fallback tile colors for items without cover art, keyed by title length.
const TILE_COLORS: [&str; 6] = [
    "#4285F4", "#EA4335", "#FBBC05", "#34A853", "#8F43EE", "#FF5E5B",
];

/// One card in a media grid.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaCard {
    pub id: i64,
    pub kind: MediaKind,
    pub title: String,
    pub byline: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub summary: Option<String>,
    pub rating: Option<f64>,
    pub cover_url: Option<String>,
}

impl MediaCard {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id,
            kind: MediaKind::Book,
            title: book.title.clone(),
            byline: book.byline(),
            genre: book.genres(),
            year: book.year(),
            summary: book.blurb().map(str::to_owned),
            rating: book.rating(),
            cover_url: book.cover_url(),
        }
    }

    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            kind: MediaKind::Movie,
            title: movie.title.clone(),
            byline: movie.byline(),
            genre: movie.genres(),
            year: movie.year(),
            summary: movie.blurb().map(str::to_owned),
            rating: movie.rating(),
            cover_url: movie.poster_url(),
        }
    }

    pub fn detail_href(&self) -> String {
        format!("{}/{}", self.kind.route_base(), self.id)
    }

    /// Tile color for the letter fallback when there is no cover art.
    pub fn fallback_color(&self) -> &'static str {
        TILE_COLORS[self.title.chars().count() % TILE_COLORS.len()]
    }

    /// Uppercased first letter of the title for the fallback tile.
    pub fn initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_owned())
    }

    /// Case-insensitive search over title and byline, plus genre substring
    /// match. Empty search/genre match everything.
    pub fn matches(&self, search: &str, genre: &str) -> bool {
        let search = search.to_lowercase();
        let matches_search = search.is_empty()
            || self.title.to_lowercase().contains(&search)
            || self
                .byline
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(&search));

        let matches_genre = genre.is_empty()
            || self
                .genre
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&genre.to_lowercase()));

        matches_search && matches_genre
    }
}

/// Distinct genre options across a collection, for the filter dropdown.
/// Combined genre strings ("Fantasy, Adventure") contribute each part.
pub fn genre_options(cards: &[MediaCard]) -> Vec<String> {
    let mut options: Vec<String> = cards
        .iter()
        .filter_map(|card| card.genre.as_deref())
        .flat_map(|genre| genre.split(", "))
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_owned)
        .collect();
    options.sort();
    options.dedup();
    options
}

/// Detail-page header fields, normalized across books and movies.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaDetail {
    pub id: i64,
    pub kind: MediaKind,
    pub title: String,
    pub byline: Option<String>,
    pub published: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub cover_url: Option<String>,
    pub description: Option<String>,
}

impl MediaDetail {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id,
            kind: MediaKind::Book,
            title: book.title.clone(),
            byline: book.byline(),
            published: book
                .published_date
                .clone()
                .or_else(|| book.year().map(|y| y.to_string())),
            genre: book.genres(),
            rating: book.rating(),
            cover_url: book.cover_url(),
            description: book.blurb().map(str::to_owned),
        }
    }

    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            kind: MediaKind::Movie,
            title: movie.title.clone(),
            byline: movie.byline(),
            published: movie
                .release_date
                .clone()
                .or_else(|| movie.year().map(|y| y.to_string())),
            genre: movie.genres(),
            rating: movie.rating(),
            cover_url: movie.poster_url(),
            description: movie.blurb().map(str::to_owned),
        }
    }

    pub fn initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_owned())
    }
}

/// Pagination over an already-filtered collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl Pager {
    pub fn new(current: usize, total_items: usize, per_page: usize) -> Self {
        let pager = Self {
            current: 1,
            total_items,
            per_page,
        };
        Self {
            current: pager.clamp(current),
            ..pager
        }
    }

    /// Always at least one page, even for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Index range of the current page within the collection.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.current - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total_items);
        (start.min(self.total_items), end)
    }
}

/// The current page's slice of an already-filtered collection.
pub fn page_slice<'a, T>(items: &'a [T], pager: &Pager) -> &'a [T] {
    let (start, end) = pager.bounds();
    &items[start..end]
}

/// One element of the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMark {
    Page(usize),
    Ellipsis,
}

/// Page-number strip: every page when there are few, otherwise first and
/// last with a window around the current page and ellipses between.
pub fn page_marks(current: usize, total: usize) -> Vec<PageMark> {
    if total <= FLAT_PAGE_LIMIT {
        return (1..=total.max(1)).map(PageMark::Page).collect();
    }

    let mut marks = vec![PageMark::Page(1)];
    if current > 3 {
        marks.push(PageMark::Ellipsis);
    }
    for page in current.saturating_sub(1)..=current + 1 {
        if page > 1 && page < total {
            marks.push(PageMark::Page(page));
        }
    }
    if current < total - 2 {
        marks.push(PageMark::Ellipsis);
    }
    marks.push(PageMark::Page(total));
    marks
}
