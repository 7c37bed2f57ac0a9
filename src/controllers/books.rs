//! Books page handlers

use std::sync::Arc;
use validator::Validate;

use crate::{
    client::BooksApi,
    error::AppError,
    models::{parse_record_id, BookInput},
    ui::{book_ids, render, Document, Notification, Prompter},
};

use super::{report_failure, Outcome};

pub struct BookController {
    api: BooksApi,
    prompter: Arc<dyn Prompter>,
}

impl BookController {
    pub fn new(api: BooksApi, prompter: Arc<dyn Prompter>) -> Self {
        Self { api, prompter }
    }

    /// Fetch the full list and render it.
    ///
    /// On failure the table keeps its previous content.
    pub async fn load(&self, doc: &mut Document) -> Outcome {
        let result = self
            .api
            .list(None)
            .await
            .and_then(|books| render::render_books(doc, book_ids::TABLE_BODY, &books));

        match result {
            Ok(()) => Outcome::Completed,
            Err(e) => self.fail("Failed to load books", e),
        }
    }

    pub async fn create(&self, doc: &mut Document) -> Outcome {
        let input = BookInput::new(doc.value(book_ids::TITLE), doc.value(book_ids::AUTHOR));
        if let Err(e) = input.validate() {
            return self.fail("Cannot add book", e.into());
        }

        match self.api.create(&input).await {
            Ok(book) => {
                tracing::info!("Created book {} ({:?})", book.id, book.title);
                doc.clear(&[book_ids::TITLE, book_ids::AUTHOR]);
                self.load(doc).await;
                self.prompter.notify(Notification::success(format!(
                    "Book \"{}\" by {} added (ID {})",
                    book.title, book.author, book.id
                )));
                Outcome::Completed
            }
            Err(e) => self.fail("Failed to add book", e),
        }
    }

    pub async fn update(&self, doc: &mut Document) -> Outcome {
        let Some(id) = parse_record_id(doc.value(book_ids::UPDATE_ID)) else {
            return self.fail(
                "Cannot update book",
                AppError::Validation("Please enter a valid book ID".to_string()),
            );
        };

        let input = BookInput::new(
            doc.value(book_ids::UPDATE_TITLE),
            doc.value(book_ids::UPDATE_AUTHOR),
        );
        if let Err(e) = input.validate() {
            return self.fail("Cannot update book", e.into());
        }

        match self.api.update(id, &input).await {
            Ok(book) => {
                tracing::info!("Updated book {}", book.id);
                doc.clear(&[
                    book_ids::UPDATE_ID,
                    book_ids::UPDATE_TITLE,
                    book_ids::UPDATE_AUTHOR,
                ]);
                self.load(doc).await;
                self.prompter.notify(Notification::success(format!(
                    "Book ID {} updated: \"{}\" by {}",
                    book.id, book.title, book.author
                )));
                Outcome::Completed
            }
            Err(e) => self.fail(&format!("Failed to update book {}", id), e),
        }
    }

    /// Fill the update form with the current values of the book in `updateId`
    pub async fn prefill_update(&self, doc: &mut Document) -> Outcome {
        let Some(id) = parse_record_id(doc.value(book_ids::UPDATE_ID)) else {
            return self.fail(
                "Cannot fetch book",
                AppError::Validation("Please enter a valid book ID".to_string()),
            );
        };

        match self.api.get(id).await {
            Ok(book) => {
                doc.set_value(book_ids::UPDATE_TITLE, book.title);
                doc.set_value(book_ids::UPDATE_AUTHOR, book.author);
                Outcome::Completed
            }
            Err(e) => self.fail(&format!("Failed to fetch book {}", id), e),
        }
    }

    /// Delete the book with the highest id, after confirmation
    pub async fn delete_highest(&self, doc: &mut Document) -> Outcome {
        if !self
            .prompter
            .confirm("Are you sure you want to delete the book with the highest ID?")
        {
            tracing::debug!("Delete cancelled by user");
            return Outcome::Cancelled;
        }

        match self.api.delete_highest().await {
            Ok(()) => {
                tracing::info!("Deleted book with the highest ID");
                self.load(doc).await;
                self.prompter.notify(Notification::success(
                    "Book with the highest ID deleted",
                ));
                Outcome::Completed
            }
            Err(e) => self.fail("Failed to delete book", e),
        }
    }

    /// Render only the books whose title matches the search input.
    ///
    /// The full list is not reloaded.
    pub async fn search(&self, doc: &mut Document) -> Outcome {
        let term = doc.value(book_ids::SEARCH).trim().to_string();
        if term.is_empty() {
            return self.fail(
                "Cannot search",
                AppError::Validation("Please enter a search term".to_string()),
            );
        }

        let result = self.api.list(Some(&term)).await.and_then(|books| {
            render::render_books(doc, book_ids::TABLE_BODY, &books)?;
            Ok(books.len())
        });

        match result {
            Ok(0) => {
                self.prompter.notify(Notification::info(format!(
                    "No books found matching \"{}\"",
                    term
                )));
                Outcome::Completed
            }
            Ok(count) => {
                tracing::debug!("Search {:?} matched {} books", term, count);
                Outcome::Completed
            }
            Err(e) => self.fail("Search failed", e),
        }
    }

    /// Empty the search input and show the unfiltered list again
    pub async fn clear_search(&self, doc: &mut Document) -> Outcome {
        doc.clear(&[book_ids::SEARCH]);
        self.load(doc).await
    }

    fn fail(&self, context: &str, err: AppError) -> Outcome {
        report_failure(self.prompter.as_ref(), context, err)
    }
}
