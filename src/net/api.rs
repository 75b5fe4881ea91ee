//! REST API client for the Chaptered backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! AUTH
//! ====
//! Requests to non-public endpoints carry `Authorization: Bearer <access>`
//! when the session holds a token; a missing token is not an error, the
//! request simply goes out unauthenticated. On a 401 the client makes at
//! most one refresh-and-retry attempt: exchange the stored refresh token
//! for a new access token, persist it through the session store, replay
//! the original request once. A second 401 is final. A failed refresh
//! clears the stored token pair and surfaces the original error unchanged.
//! No retry loops, no backoff, no queuing of concurrent requests — each
//! request races its own refresh attempt independently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::ApiError;
use super::types::{
    ApiStatus, Book, ListResponse, MediaKind, Movie, Profile, ProfileResponse, Review,
    TokenResponse,
};
use crate::state::session::SessionStore;

/// Base URL of the backend. Absolute so the client can target a backend
/// on a different origin during development.
pub const API_URL: &str = "http://localhost:8000";

/// Endpoint prefixes reachable without an access token: book and movie
/// catalog routes, registration, and token obtain/refresh.
const PUBLIC_PREFIXES: [&str; 4] = [
    "/api/books/",
    "/api/movies/",
    "/api/auth/register/",
    "/api/auth/token/",
];

/// HTTP methods used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Whether a request may be sent without a bearer token. Matches by path
/// prefix, GET and POST only, like the original interceptor — so detail
/// routes under the public prefixes are also sent unauthenticated.
pub fn is_public_endpoint(path: &str, method: Method) -> bool {
    matches!(method, Method::Get | Method::Post)
        && PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Format an `Authorization` header value from an access token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a 401 response should trigger a refresh-and-retry attempt:
/// at most once per request, and only when a refresh token exists.
pub fn should_refresh(status: u16, already_retried: bool, has_refresh_token: bool) -> bool {
    status == 401 && !already_retried && has_refresh_token
}

#[cfg(feature = "hydrate")]
async fn send_once(
    session: SessionStore,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
    token_override: Option<&str>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{API_URL}{path}");
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };

    if !is_public_endpoint(path, method) {
        let token = token_override
            .map(str::to_owned)
            .or_else(|| session.access_token());
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(&token));
        }
    }

    let request = match body {
        Some(value) => builder
            .json(value)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn error_from(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    ApiError::Status { status, body }
}

/// Exchange a refresh token for a new access token. Sent outside the
/// interception path, like the original's raw refresh call.
#[cfg(feature = "hydrate")]
async fn refresh_access_token(refresh: &str) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(&format!("{API_URL}/api/auth/token/refresh/"))
        .json(&json!({ "refresh": refresh }))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    let tokens: TokenResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(tokens.access)
}

/// Send a request, applying the single refresh-and-retry rule on 401.
#[cfg(feature = "hydrate")]
async fn request(
    session: SessionStore,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = send_once(session, method, path, body.as_ref(), None).await?;
    if resp.ok() {
        return Ok(resp);
    }

    let err = error_from(resp).await;
    let status = err.status().unwrap_or(0);
    if !should_refresh(status, false, session.refresh_token().is_some()) {
        return Err(err);
    }
    let Some(refresh) = session.refresh_token() else {
        return Err(err);
    };

    match refresh_access_token(&refresh).await {
        Ok(access) => {
            session.set_access_token(&access);
            let retried = send_once(session, method, path, body.as_ref(), Some(&access)).await?;
            if retried.ok() {
                Ok(retried)
            } else {
                Err(error_from(retried).await)
            }
        }
        Err(refresh_err) => {
            leptos::logging::warn!("token refresh failed: {refresh_err}");
            session.clear_tokens();
            Err(err)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn request_json<T: DeserializeOwned>(
    session: SessionStore,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let resp = request(session, method, path, body).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn request_unit(
    session: SessionStore,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    request(session, method, path, body).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
async fn request_json<T: DeserializeOwned>(
    _session: SessionStore,
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
async fn request_unit(
    _session: SessionStore,
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    Err(ApiError::Unavailable)
}

// ---- status ----

/// Liveness/version probe at `GET /`.
pub async fn fetch_status(session: SessionStore) -> Result<ApiStatus, ApiError> {
    request_json(session, Method::Get, "/", None).await
}

// ---- books ----

pub async fn fetch_books(session: SessionStore) -> Result<Vec<Book>, ApiError> {
    request_json::<ListResponse<Book>>(session, Method::Get, "/api/books/", None)
        .await
        .map(ListResponse::into_vec)
}

pub async fn fetch_book(session: SessionStore, id: i64) -> Result<Book, ApiError> {
    request_json(session, Method::Get, &format!("/api/books/{id}/"), None).await
}

/// Curated feed of the newest books.
pub async fn fetch_latest_books(session: SessionStore) -> Result<Vec<Book>, ApiError> {
    request_json::<ListResponse<Book>>(session, Method::Get, "/api/latest/books/", None)
        .await
        .map(ListResponse::into_vec)
}

// ---- movies ----

pub async fn fetch_movies(session: SessionStore) -> Result<Vec<Movie>, ApiError> {
    request_json::<ListResponse<Movie>>(session, Method::Get, "/api/movies/", None)
        .await
        .map(ListResponse::into_vec)
}

pub async fn fetch_movie(session: SessionStore, id: i64) -> Result<Movie, ApiError> {
    request_json(session, Method::Get, &format!("/api/movies/{id}/"), None).await
}

/// Curated feed of the newest movies.
pub async fn fetch_latest_movies(session: SessionStore) -> Result<Vec<Movie>, ApiError> {
    request_json::<ListResponse<Movie>>(session, Method::Get, "/api/latest/movies/", None)
        .await
        .map(ListResponse::into_vec)
}

// ---- reviews ----

/// Reviews for one media item, filtered server-side by `book_id`/`movie_id`.
pub async fn fetch_reviews(
    session: SessionStore,
    kind: MediaKind,
    media_id: i64,
) -> Result<Vec<Review>, ApiError> {
    let path = format!("/api/reviews/?{}={media_id}", kind.review_filter_param());
    request_json::<ListResponse<Review>>(session, Method::Get, &path, None)
        .await
        .map(ListResponse::into_vec)
}

pub async fn create_review(
    session: SessionStore,
    media_id: i64,
    rating: u8,
    review_text: &str,
) -> Result<Review, ApiError> {
    let body = json!({
        "media": media_id,
        "rating": rating,
        "review_text": review_text,
    });
    request_json(session, Method::Post, "/api/reviews/", Some(body)).await
}

// ---- auth ----

pub async fn register(
    session: SessionStore,
    username: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(), ApiError> {
    let body = json!({
        "username": username,
        "email": email,
        "password": password,
        "password_confirm": password_confirm,
    });
    request_unit(session, Method::Post, "/api/auth/register/", Some(body)).await
}

pub async fn login(
    session: SessionStore,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let body = json!({
        "username": username,
        "password": password,
    });
    request_json(session, Method::Post, "/api/auth/token/", Some(body)).await
}

pub async fn change_password(session: SessionStore, new_password: &str) -> Result<(), ApiError> {
    let body = json!({ "new_password": new_password });
    request_unit(session, Method::Post, "/api/auth/password/change/", Some(body)).await
}

// ---- profiles ----

/// The current user's profile. The backend returns either the object or a
/// list containing it.
pub async fn fetch_profile(session: SessionStore) -> Result<Option<Profile>, ApiError> {
    request_json::<ProfileResponse>(session, Method::Get, "/api/profiles/", None)
        .await
        .map(ProfileResponse::into_profile)
}

/// Partial profile update: name fields nest under `user`, bio is flat.
pub async fn update_profile(
    session: SessionStore,
    profile_id: i64,
    first_name: &str,
    last_name: &str,
    bio: &str,
) -> Result<(), ApiError> {
    let body = json!({
        "user": {
            "first_name": first_name,
            "last_name": last_name,
        },
        "bio": bio,
    });
    request_unit(
        session,
        Method::Patch,
        &format!("/api/profiles/{profile_id}/"),
        Some(body),
    )
    .await
}
