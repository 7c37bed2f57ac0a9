//! Users resource: `/api/users`

use reqwest::Method;

use crate::{
    error::AppResult,
    models::user::{User, UserInput},
};

use super::ApiClient;

const USERS_PATH: &str = "api/users";

#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        let url = self.client.endpoint(USERS_PATH)?;
        self.client.fetch(Method::GET, url, None).await
    }

    pub async fn create(&self, input: &UserInput) -> AppResult<User> {
        let url = self.client.endpoint(USERS_PATH)?;
        let body = serde_json::to_value(input)?;
        self.client.fetch(Method::POST, url, Some(body)).await
    }

    pub async fn update(&self, id: i64, input: &UserInput) -> AppResult<User> {
        let url = self.client.endpoint(&format!("{}/{}", USERS_PATH, id))?;
        let body = serde_json::to_value(input)?;
        self.client.fetch(Method::PUT, url, Some(body)).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self.client.endpoint(&format!("{}/{}", USERS_PATH, id))?;
        self.client.fetch_empty(Method::DELETE, url).await
    }
}
