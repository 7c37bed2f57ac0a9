//! Books resource: `/api/books`

use reqwest::Method;

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
};

use super::ApiClient;

const BOOKS_PATH: &str = "api/books";

#[derive(Clone)]
pub struct BooksApi {
    client: ApiClient,
}

impl BooksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all books, or only those whose title matches `search`
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Book>> {
        let url = match search {
            Some(term) => self
                .client
                .endpoint_with_query(BOOKS_PATH, &[("search", term)])?,
            None => self.client.endpoint(BOOKS_PATH)?,
        };
        self.client.fetch(Method::GET, url, None).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Book> {
        let url = self.client.endpoint(&format!("{}/{}", BOOKS_PATH, id))?;
        self.client.fetch(Method::GET, url, None).await
    }

    pub async fn create(&self, input: &BookInput) -> AppResult<Book> {
        let url = self.client.endpoint(BOOKS_PATH)?;
        let body = serde_json::to_value(input)?;
        self.client.fetch(Method::POST, url, Some(body)).await
    }

    pub async fn update(&self, id: i64, input: &BookInput) -> AppResult<Book> {
        let url = self.client.endpoint(&format!("{}/{}", BOOKS_PATH, id))?;
        let body = serde_json::to_value(input)?;
        self.client.fetch(Method::PUT, url, Some(body)).await
    }

    /// Delete whichever book currently has the highest id
    pub async fn delete_highest(&self) -> AppResult<()> {
        let url = self.client.endpoint(&format!("{}/highest", BOOKS_PATH))?;
        self.client.fetch_empty(Method::DELETE, url).await
    }
}
