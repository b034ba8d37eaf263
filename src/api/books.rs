//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse, MessageResponse},
    models::book::{Book, BookPayload},
};

use super::{AppJson, BookId};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book, in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created with a server-assigned id", body = Book),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated, path id kept", body = Book),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    BookId(id): BookId,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, payload).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    BookId(id): BookId,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(id).await?;
    Ok(Json(MessageResponse::new("Book deleted")))
}
