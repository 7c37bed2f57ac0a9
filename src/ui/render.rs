//! Table rendering.
//!
//! Rows are produced by askama templates, so every field is HTML-escaped
//! before it reaches the table body.

use askama::Template;

use crate::{
    error::AppResult,
    models::{Book, User},
};

use super::Document;

#[derive(Template)]
#[template(path = "book_rows.html")]
struct BookRows<'a> {
    books: &'a [Book],
}

#[derive(Template)]
#[template(path = "user_rows.html")]
struct UserRows<'a> {
    users: &'a [User],
}

/// Replace the content of `table_id` with one row per book
pub fn render_books(doc: &mut Document, table_id: &str, books: &[Book]) -> AppResult<()> {
    let html = BookRows { books }.render()?;
    doc.set_inner_html(table_id, html);
    Ok(())
}

/// Replace the content of `table_id` with one row per user
pub fn render_users(doc: &mut Document, table_id: &str, users: &[User]) -> AppResult<()> {
    let html = UserRows { users }.render()?;
    doc.set_inner_html(table_id, html);
    Ok(())
}
