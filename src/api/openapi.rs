//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, root};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book API",
        version = "1.0",
        description = "A simple CRUD API for an in-memory list of books"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        root::welcome,
        health::health_check,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::error::MessageResponse,
        )
    ),
    tags(
        (name = "root", description = "Welcome endpoint"),
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
