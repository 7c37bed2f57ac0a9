//! Integration tests against a running books/users backend

use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

use bookshelf_client::{
    client::{ApiClient, BooksApi, HttpTransport, UsersApi},
    config::ApiConfig,
    controllers::{BookController, Outcome, UserController},
    ui::{book_ids, user_ids, Document, MemoryPrompter, Severity},
};

const BASE_URL: &str = "http://localhost:8080";

fn api_client() -> ApiClient {
    let config = ApiConfig {
        base_url: BASE_URL.to_string(),
        timeout_secs: 5,
    };
    let transport = HttpTransport::new(&config).expect("Failed to build transport");
    ApiClient::new(Arc::new(transport), BASE_URL)
}

fn book_controller(prompter: Arc<MemoryPrompter>) -> BookController {
    BookController::new(BooksApi::new(api_client()), prompter)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_load_renders_every_book() {
    let books: Vec<Value> = Client::new()
        .get(format!("{}/api/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let prompter = Arc::new(MemoryPrompter::new(true));
    let mut doc = Document::new();
    let outcome = book_controller(prompter).load(&mut doc).await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(doc.row_count(book_ids::TABLE_BODY), books.len());
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_book() {
    let prompter = Arc::new(MemoryPrompter::new(true));
    let controller = book_controller(prompter.clone());
    let mut doc = Document::new();

    // Create
    doc.set_value(book_ids::TITLE, "Dune");
    doc.set_value(book_ids::AUTHOR, "Frank Herbert");
    assert_eq!(controller.create(&mut doc).await, Outcome::Completed);
    assert!(doc.inner_html(book_ids::TABLE_BODY).contains("Dune"));

    // The new book has the highest id
    let books: Vec<Value> = Client::new()
        .get(format!("{}/api/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = books
        .iter()
        .filter_map(|b| b["id"].as_i64())
        .max()
        .expect("No books returned");

    // Update
    doc.set_value(book_ids::UPDATE_ID, id.to_string());
    doc.set_value(book_ids::UPDATE_TITLE, "Dune Messiah");
    doc.set_value(book_ids::UPDATE_AUTHOR, "Frank Herbert");
    assert_eq!(controller.update(&mut doc).await, Outcome::Completed);
    assert!(doc.inner_html(book_ids::TABLE_BODY).contains("Dune Messiah"));

    // Delete
    assert_eq!(controller.delete_highest(&mut doc).await, Outcome::Completed);
    assert!(!doc.inner_html(book_ids::TABLE_BODY).contains("Dune Messiah"));
}

#[tokio::test]
#[ignore]
async fn test_search_books() {
    let prompter = Arc::new(MemoryPrompter::new(true));
    let controller = book_controller(prompter.clone());
    let mut doc = Document::new();

    doc.set_value(book_ids::SEARCH, "gatsby");
    assert_eq!(controller.search(&mut doc).await, Outcome::Completed);
    assert!(doc.inner_html(book_ids::TABLE_BODY).contains("The Great Gatsby"));

    assert_eq!(controller.clear_search(&mut doc).await, Outcome::Completed);
    assert_eq!(doc.value(book_ids::SEARCH), "");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_blank_title_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .json(&json!({
            "title": "   ",
            "author": "Nobody"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Book title is required");
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book_reports_detail() {
    let prompter = Arc::new(MemoryPrompter::new(true));
    let controller = book_controller(prompter.clone());
    let mut doc = Document::new();

    doc.set_value(book_ids::UPDATE_ID, "999999");
    doc.set_value(book_ids::UPDATE_TITLE, "Ghost");
    doc.set_value(book_ids::UPDATE_AUTHOR, "Nobody");

    assert_eq!(controller.update(&mut doc).await, Outcome::Failed);
    let last = prompter.last().expect("No notification");
    assert_eq!(last.severity, Severity::Error);
    assert!(last.message.contains("Book not found"));
}

#[tokio::test]
#[ignore]
async fn test_user_lifecycle() {
    let prompter = Arc::new(MemoryPrompter::new(true));
    let controller = UserController::new(UsersApi::new(api_client()), prompter.clone());
    let mut doc = Document::new();

    doc.set_value(user_ids::NAME, "Integration User");
    assert_eq!(controller.create(&mut doc).await, Outcome::Completed);

    let users: Vec<Value> = Client::new()
        .get(format!("{}/api/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = users
        .iter()
        .find(|u| u["name"] == "Integration User")
        .and_then(|u| u["id"].as_i64())
        .expect("Created user not listed");

    // Cleanup: delete the user
    doc.set_value(user_ids::DELETE_ID, id.to_string());
    assert_eq!(controller.delete(&mut doc).await, Outcome::Completed);
    assert!(!doc
        .inner_html(user_ids::TABLE_BODY)
        .contains("Integration User"));
}
