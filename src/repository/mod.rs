//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }

    /// Create a repository holding the startup seed data
    pub fn seeded() -> Self {
        Self {
            books: books::BooksRepository::seeded(),
        }
    }
}
