//! Bookshelf client
//!
//! CRUD front-end for the books and users REST API: handlers read form
//! inputs from a [`ui::Document`], call the backend, and re-render the
//! affected table.

pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
