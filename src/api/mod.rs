//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod root;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor.
///
/// The body is decoded whatever the `Content-Type` header says; decode
/// failures render as `{"error": ...}` with 400.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(AppJson(value))
    }
}

/// Book id taken from the `:id` path segment.
///
/// Anything that is not a base-10 integer becomes id 0, which never matches
/// a stored book, so such requests end up as "not found". Values outside the
/// `i64` range also become 0 rather than being clamped to `i64::MAX`; either
/// way no book carries that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i64);

impl BookId {
    pub fn parse(raw: &str) -> Self {
        BookId(raw.parse().unwrap_or(0))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => BookId::parse(&raw),
            Err(rejection) => {
                tracing::debug!("Unreadable book id: {}", rejection.body_text());
                BookId(0)
            }
        };
        Ok(id)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/", get(root::welcome))
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
