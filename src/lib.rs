//! Bookshelf Server
//!
//! A small REST JSON API for managing an in-memory list of books,
//! with OpenAPI documentation served through Swagger UI.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state from configuration, seeding the store when requested
    pub fn new(config: &AppConfig) -> Self {
        let repository = if config.store.seed {
            repository::Repository::seeded()
        } else {
            repository::Repository::new()
        };

        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
