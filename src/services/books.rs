//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

pub const BOOK_NOT_FOUND: &str = "Book not found";

fn not_found(id: i64) -> AppError {
    tracing::debug!("Book {} not found", id);
    AppError::NotFound(BOOK_NOT_FOUND.to_string())
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list().await)
    }

    pub async fn count(&self) -> usize {
        self.repository.books.len().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    /// Store a new book under the next id, ignoring any client id
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        let book = self.repository.books.create(payload).await;
        tracing::info!("Created book id={}", book.id);
        Ok(book)
    }

    pub async fn update(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update(id, payload)
            .await
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.books.delete(id).await {
            return Err(not_found(id));
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
