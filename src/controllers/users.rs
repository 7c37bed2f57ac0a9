//! Users page handlers

use std::sync::Arc;
use validator::Validate;

use crate::{
    client::UsersApi,
    error::AppError,
    models::{parse_record_id, UserInput},
    ui::{render, user_ids, Document, Notification, Prompter},
};

use super::{report_failure, Outcome};

pub struct UserController {
    api: UsersApi,
    prompter: Arc<dyn Prompter>,
}

impl UserController {
    pub fn new(api: UsersApi, prompter: Arc<dyn Prompter>) -> Self {
        Self { api, prompter }
    }

    pub async fn load(&self, doc: &mut Document) -> Outcome {
        let result = self
            .api
            .list()
            .await
            .and_then(|users| render::render_users(doc, user_ids::TABLE_BODY, &users));

        match result {
            Ok(()) => Outcome::Completed,
            Err(e) => self.fail("Failed to load users", e),
        }
    }

    pub async fn create(&self, doc: &mut Document) -> Outcome {
        let input = UserInput::new(doc.value(user_ids::NAME));
        if let Err(e) = input.validate() {
            return self.fail("Cannot add user", e.into());
        }

        match self.api.create(&input).await {
            Ok(user) => {
                tracing::info!("Created user {}", user.id);
                doc.clear(&[user_ids::NAME]);
                self.load(doc).await;
                self.prompter.notify(Notification::success(format!(
                    "User \"{}\" added (ID {})",
                    user.name, user.id
                )));
                Outcome::Completed
            }
            Err(e) => self.fail("Failed to add user", e),
        }
    }

    pub async fn update(&self, doc: &mut Document) -> Outcome {
        let Some(id) = parse_record_id(doc.value(user_ids::UPDATE_ID)) else {
            return self.fail(
                "Cannot update user",
                AppError::Validation("Please enter a valid user ID".to_string()),
            );
        };

        let input = UserInput::new(doc.value(user_ids::UPDATE_NAME));
        if let Err(e) = input.validate() {
            return self.fail("Cannot update user", e.into());
        }

        match self.api.update(id, &input).await {
            Ok(user) => {
                tracing::info!("Updated user {}", user.id);
                doc.clear(&[user_ids::UPDATE_ID, user_ids::UPDATE_NAME]);
                self.load(doc).await;
                self.prompter.notify(Notification::success(format!(
                    "User ID {} renamed to \"{}\"",
                    user.id, user.name
                )));
                Outcome::Completed
            }
            Err(e) => self.fail(&format!("Failed to update user {}", id), e),
        }
    }

    /// Delete the user named in `deleteUserId`, after confirmation
    pub async fn delete(&self, doc: &mut Document) -> Outcome {
        let Some(id) = parse_record_id(doc.value(user_ids::DELETE_ID)) else {
            return self.fail(
                "Cannot delete user",
                AppError::Validation("Please enter a valid user ID".to_string()),
            );
        };

        if !self
            .prompter
            .confirm(&format!("Are you sure you want to delete user {}?", id))
        {
            tracing::debug!("Delete of user {} cancelled by user", id);
            return Outcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted user {}", id);
                doc.clear(&[user_ids::DELETE_ID]);
                self.load(doc).await;
                self.prompter
                    .notify(Notification::success(format!("User ID {} deleted", id)));
                Outcome::Completed
            }
            Err(e) => self.fail(&format!("Failed to delete user {}", id), e),
        }
    }

    fn fail(&self, context: &str, err: AppError) -> Outcome {
        report_failure(self.prompter.as_ref(), context, err)
    }
}
