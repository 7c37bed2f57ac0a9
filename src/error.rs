//! Error types for the Bookshelf client

use reqwest::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl AppError {
    /// Text shown to the user when a handler fails.
    ///
    /// A `detail` sent by the backend wins over the generic description.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.to_string(), msg)
                })
            })
            .collect();
        // Field order from the map is unspecified
        messages.sort();

        let text = messages
            .into_iter()
            .map(|(_, msg)| msg)
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(text)
    }
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
