use super::*;

// =============================================================
// Book — catalog vs curated feed shapes
// =============================================================

#[test]
fn book_catalog_shape_deserializes() {
    let json = serde_json::json!({
        "id": 3,
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Science Fiction",
        "publication_year": 1965,
        "summary": "Desert planet.",
        "avg_rating": 4.5
    });
    let book: Book = serde_json::from_value(json).expect("book");
    assert_eq!(book.byline().as_deref(), Some("Frank Herbert"));
    assert_eq!(book.rating(), Some(4.5));
    assert_eq!(book.genres().as_deref(), Some("Science Fiction"));
    assert_eq!(book.year(), Some(1965));
    assert_eq!(book.blurb(), Some("Desert planet."));
    assert_eq!(book.cover_url(), None);
}

#[test]
fn book_feed_shape_uses_fallback_fields() {
    let json = serde_json::json!({
        "id": 9,
        "title": "The Hobbit",
        "authors": ["J. R. R. Tolkien"],
        "categories": ["Fantasy", "Adventure"],
        "published_date": "1937-09-21",
        "description": "There and back again.",
        "average_rating": 4.8,
        "image_links": {"thumbnail": "http://covers/hobbit.jpg"}
    });
    let book: Book = serde_json::from_value(json).expect("book");
    assert_eq!(book.byline().as_deref(), Some("J. R. R. Tolkien"));
    assert_eq!(book.rating(), Some(4.8));
    assert_eq!(book.genres().as_deref(), Some("Fantasy, Adventure"));
    assert_eq!(book.year(), Some(1937));
    assert_eq!(book.blurb(), Some("There and back again."));
    assert_eq!(book.cover_url().as_deref(), Some("http://covers/hobbit.jpg"));
}

#[test]
fn book_tolerates_missing_everything_but_id() {
    let book: Book = serde_json::from_value(serde_json::json!({"id": 1})).expect("book");
    assert_eq!(book.byline(), None);
    assert_eq!(book.rating(), None);
    assert_eq!(book.year(), None);
    assert_eq!(book.blurb(), None);
}

// =============================================================
// Movie
// =============================================================

#[test]
fn movie_poster_url_uses_cdn() {
    let movie: Movie = serde_json::from_value(serde_json::json!({
        "id": 2,
        "title": "Arrival",
        "poster_path": "/abc.jpg"
    }))
    .expect("movie");
    assert_eq!(
        movie.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/w500/abc.jpg")
    );
}

#[test]
fn movie_without_poster_has_no_url() {
    let movie = Movie {
        id: 2,
        title: "Arrival".to_owned(),
        ..Movie::default()
    };
    assert_eq!(movie.poster_url(), None);
}

#[test]
fn movie_rating_prefers_avg_rating_over_vote_average() {
    let movie = Movie {
        id: 1,
        avg_rating: Some(4.0),
        vote_average: Some(7.9),
        ..Movie::default()
    };
    assert_eq!(movie.rating(), Some(4.0));

    let movie = Movie {
        id: 1,
        vote_average: Some(7.9),
        ..Movie::default()
    };
    assert_eq!(movie.rating(), Some(7.9));
}

#[test]
fn movie_year_falls_back_to_release_date() {
    let movie = Movie {
        id: 1,
        release_date: Some("2016-11-11".to_owned()),
        ..Movie::default()
    };
    assert_eq!(movie.year(), Some(2016));
}

// =============================================================
// List and profile envelopes
// =============================================================

#[test]
fn list_response_accepts_paginated_body() {
    let json = serde_json::json!({"count": 1, "results": [{"id": 1, "title": "Dune"}]});
    let list: ListResponse<Book> = serde_json::from_value(json).expect("list");
    assert_eq!(list.into_vec().len(), 1);
}

#[test]
fn list_response_accepts_bare_array() {
    let json = serde_json::json!([{"id": 1, "title": "Dune"}]);
    let list: ListResponse<Book> = serde_json::from_value(json).expect("list");
    assert_eq!(list.into_vec().len(), 1);
}

#[test]
fn profile_response_takes_first_of_many() {
    let json = serde_json::json!([{"id": 4, "username": "bob"}, {"id": 5}]);
    let resp: ProfileResponse = serde_json::from_value(json).expect("profiles");
    assert_eq!(resp.into_profile().and_then(|p| p.id), Some(4));
}

#[test]
fn profile_response_accepts_single_object() {
    let json = serde_json::json!({"id": 4, "username": "bob"});
    let resp: ProfileResponse = serde_json::from_value(json).expect("profile");
    assert_eq!(resp.into_profile().and_then(|p| p.id), Some(4));
}

#[test]
fn profile_response_empty_list_is_none() {
    let resp: ProfileResponse = serde_json::from_value(serde_json::json!([])).expect("profiles");
    assert!(resp.into_profile().is_none());
}

#[test]
fn profile_key_falls_back_to_user_id() {
    let profile = Profile {
        user: Some(7),
        ..Profile::default()
    };
    assert_eq!(profile.key(), Some(7));
}

#[test]
fn profile_full_name_trims_missing_parts() {
    let profile = Profile {
        first_name: Some("Ada".to_owned()),
        ..Profile::default()
    };
    assert_eq!(profile.full_name().as_deref(), Some("Ada"));

    assert_eq!(Profile::default().full_name(), None);
}

// =============================================================
// Token payloads
// =============================================================

#[test]
fn token_response_full_login_payload() {
    let json = serde_json::json!({
        "access": "a",
        "refresh": "r",
        "user": {"username": "bob", "email": "b@x.com", "id": 7}
    });
    let tokens: TokenResponse = serde_json::from_value(json).expect("tokens");
    assert_eq!(tokens.access, "a");
    assert_eq!(tokens.refresh.as_deref(), Some("r"));
    let user = tokens.user.expect("user");
    assert_eq!(user.username.as_deref(), Some("bob"));
    assert_eq!(user.id, Some(7));
}

#[test]
fn token_response_refresh_only_payload() {
    let tokens: TokenResponse =
        serde_json::from_value(serde_json::json!({"access": "a2"})).expect("tokens");
    assert_eq!(tokens.access, "a2");
    assert!(tokens.refresh.is_none());
    assert!(tokens.user.is_none());
}

// =============================================================
// MediaKind
// =============================================================

#[test]
fn media_kind_review_filter_params() {
    assert_eq!(MediaKind::Book.review_filter_param(), "book_id");
    assert_eq!(MediaKind::Movie.review_filter_param(), "movie_id");
}

#[test]
fn media_kind_route_bases() {
    assert_eq!(MediaKind::Book.route_base(), "/books");
    assert_eq!(MediaKind::Movie.route_base(), "/movies");
}

#[test]
fn api_status_running_check() {
    let status: ApiStatus = serde_json::from_value(serde_json::json!({
        "api_name": "Chaptered API",
        "version": "1.0.0",
        "status": "running"
    }))
    .expect("status");
    assert!(status.is_running());
    assert!(!ApiStatus::default().is_running());
}
