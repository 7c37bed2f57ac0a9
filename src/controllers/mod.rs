//! Page handlers: read inputs, call the backend, refresh the table

pub mod books;
pub mod users;

pub use books::BookController;
pub use users::UserController;

use crate::{
    error::AppError,
    ui::{Notification, Prompter},
};

/// How a handler run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Input was rejected before any request was sent
    Invalid,
    /// The user declined the confirmation prompt
    Cancelled,
    Failed,
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Log a handler error and surface it to the user
pub(crate) fn report_failure(prompter: &dyn Prompter, context: &str, err: AppError) -> Outcome {
    if err.is_validation() {
        tracing::debug!("{}: {}", context, err);
        prompter.notify(Notification::warning(err.user_message()));
        return Outcome::Invalid;
    }

    tracing::error!("{}: {}", context, err);
    prompter.notify(Notification::error(format!(
        "{}: {}",
        context,
        err.user_message()
    )));
    Outcome::Failed
}
