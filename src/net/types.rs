//! Wire shapes consumed from the Chaptered backend.
//!
//! The backend serves two generations of each media shape (the catalog
//! routes use `author`/`avg_rating`/`publication_year`, the curated feeds
//! use `authors`/`average_rating`/`published_date`), so every field beyond
//! the id is optional and accessor methods normalize the two. Collections
//! arrive either paginated (`{"results": [...]}`) or as a bare array.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Image CDN used for movie posters, keyed by `poster_path`.
pub const POSTER_CDN: &str = "https://image.tmdb.org/t/p/w500";

/// The backend's umbrella term for a reviewable book or movie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Book,
    Movie,
}

impl MediaKind {
    /// Query parameter the reviews endpoint filters by.
    pub fn review_filter_param(self) -> &'static str {
        match self {
            Self::Book => "book_id",
            Self::Movie => "movie_id",
        }
    }

    /// Lowercase noun for user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Movie => "movie",
        }
    }

    /// Route prefix for detail pages.
    pub fn route_base(self) -> &'static str {
        match self {
            Self::Book => "/books",
            Self::Movie => "/movies",
        }
    }
}

/// Payload of the `GET /` liveness probe.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub api_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub status: String,
}

impl ApiStatus {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// Cover image references on book payloads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Book {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

impl Book {
    /// Author line: `author` when present, otherwise the `authors` list.
    pub fn byline(&self) -> Option<String> {
        if let Some(author) = self.author.as_ref().filter(|a| !a.is_empty()) {
            return Some(author.clone());
        }
        self.authors
            .as_ref()
            .filter(|a| !a.is_empty())
            .map(|a| a.join(", "))
    }

    pub fn rating(&self) -> Option<f64> {
        self.avg_rating.or(self.average_rating)
    }

    /// Combined genre line: `genre` when present, otherwise `categories`.
    pub fn genres(&self) -> Option<String> {
        if let Some(genre) = self.genre.as_ref().filter(|g| !g.is_empty()) {
            return Some(genre.clone());
        }
        self.categories
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| c.join(", "))
    }

    /// Publication year, falling back to the year prefix of `published_date`.
    pub fn year(&self) -> Option<i32> {
        self.publication_year.or_else(|| {
            self.published_date
                .as_deref()
                .and_then(|d| d.get(..4))
                .and_then(|y| y.parse().ok())
        })
    }

    pub fn blurb(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description.as_deref())
    }

    pub fn cover_url(&self) -> Option<String> {
        self.image_links
            .as_ref()
            .and_then(|links| links.thumbnail.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    pub fn byline(&self) -> Option<String> {
        self.director.clone().filter(|d| !d.is_empty())
    }

    pub fn rating(&self) -> Option<f64> {
        self.avg_rating.or(self.vote_average)
    }

    pub fn genres(&self) -> Option<String> {
        self.genre.clone().filter(|g| !g.is_empty())
    }

    pub fn year(&self) -> Option<i32> {
        self.release_year.or_else(|| {
            self.release_date
                .as_deref()
                .and_then(|d| d.get(..4))
                .and_then(|y| y.parse().ok())
        })
    }

    pub fn blurb(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.overview.as_deref())
    }

    /// Full poster URL on the image CDN, if the payload carries a path.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{POSTER_CDN}{p}"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub media: Option<i64>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl Profile {
    /// Identifier used for partial updates: `id` when the serializer sends
    /// one, otherwise the related user id.
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.user)
    }

    /// "First Last" when either part is set.
    pub fn full_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        let full = format!("{first} {last}");
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_owned())
        }
    }
}

/// User object embedded in token responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Payload of `POST /api/auth/token/` and `POST /api/auth/token/refresh/`.
/// The refresh route returns only `access`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Collection envelope: DRF pagination or a bare array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Paged { results } => results,
            Self::Plain(items) => items,
        }
    }
}

/// `GET /api/profiles/` returns either the caller's profile object or a
/// list containing it.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Many(Vec<Profile>),
    One(Profile),
}

impl ProfileResponse {
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Many(mut profiles) => {
                if profiles.is_empty() {
                    None
                } else {
                    Some(profiles.remove(0))
                }
            }
            Self::One(profile) => Some(profile),
        }
    }
}
