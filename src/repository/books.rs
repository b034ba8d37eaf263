//! In-memory book storage

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::{seed_books, Book, BookPayload};

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: i64,
}

/// Ordered collection of books behind a read/write lock.
///
/// Ids come from a counter advanced under the write lock; deleted ids are
/// never handed out again.
#[derive(Clone, Debug)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl BooksRepository {
    /// Empty store, first id is 1
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Store holding the two seed books, first new id is 3
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: Arc::new(RwLock::new(Shelf { books, next_id })),
        }
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Book> {
        let shelf = self.shelf.read().await;
        shelf.books.iter().find(|b| b.id == id).cloned()
    }

    /// Append a book with the next id
    pub async fn create(&self, payload: BookPayload) -> Book {
        let mut shelf = self.shelf.write().await;
        let book = Book::from_payload(shelf.next_id, payload);
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        book
    }

    /// Replace the book with `id` in place, keeping `id`
    pub async fn update(&self, id: i64, payload: BookPayload) -> Option<Book> {
        let mut shelf = self.shelf.write().await;
        let slot = shelf.books.iter_mut().find(|b| b.id == id)?;
        *slot = Book::from_payload(id, payload);
        Some(slot.clone())
    }

    /// Remove the book with `id`, returns whether one was removed
    pub async fn delete(&self, id: i64) -> bool {
        let mut shelf = self.shelf.write().await;
        match shelf.books.iter().position(|b| b.id == id) {
            Some(index) => {
                shelf.books.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
