//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Create / update user request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, message = "User name is required"))]
    pub name: String,
}

impl UserInput {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}
