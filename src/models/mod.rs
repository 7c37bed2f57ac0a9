//! Data models for Bookshelf

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookInput};
pub use user::{User, UserInput};

/// Parse a record identifier typed by the user.
///
/// Empty, non-numeric and zero values are rejected.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id != 0)
}
