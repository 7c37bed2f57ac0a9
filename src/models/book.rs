//! Book model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Create / update book request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Book title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author name is required"))]
    pub author: String,
}

impl BookInput {
    /// Build from raw form values; surrounding whitespace is dropped.
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        }
    }
}
