//! Page surface shared by the handlers

pub mod document;
pub mod notify;
pub mod render;

pub use document::Document;
pub use notify::{ConsolePrompter, MemoryPrompter, Notification, Prompter, Severity};

/// Element ids of the books page
pub mod book_ids {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const UPDATE_ID: &str = "updateId";
    pub const UPDATE_TITLE: &str = "updateTitle";
    pub const UPDATE_AUTHOR: &str = "updateAuthor";
    pub const SEARCH: &str = "searchInput";
    pub const TABLE_BODY: &str = "bookTableBody";
}

/// Element ids of the users page
pub mod user_ids {
    pub const NAME: &str = "userName";
    pub const UPDATE_ID: &str = "updateUserId";
    pub const UPDATE_NAME: &str = "updateUserName";
    pub const DELETE_ID: &str = "deleteUserId";
    pub const TABLE_BODY: &str = "userTableBody";
}
