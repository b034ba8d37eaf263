//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Go Programming")]
    pub title: String,
    #[schema(example = "John Doe")]
    pub author: String,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Build the stored record for `id` from a request body
    pub fn from_payload(id: i64, payload: BookPayload) -> Self {
        Self {
            id,
            title: payload.title,
            author: payload.author,
        }
    }
}

/// Create / update book request.
///
/// Missing or `null` fields default to empty strings. Any `id` sent by the
/// client is decoded but never stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    /// Ignored, the server assigns or enforces the id
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The two books present at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "Go Programming", "John Doe"),
        Book::new(2, "REST APIs with Gin", "Jane Doe"),
    ]
}
