//! REST client for the books and users backend

pub mod books;
pub mod transport;
pub mod users;

pub use books::BooksApi;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
pub use users::UsersApi;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Shared request plumbing used by the resource APIs
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a path relative to the backend root
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| AppError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Same as [`endpoint`](Self::endpoint) with URL-encoded query parameters
    pub fn endpoint_with_query(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Url> {
        let mut url = self.endpoint(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Send a request and decode the JSON response body
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> AppResult<T> {
        let mut request = ApiRequest::new(method, url);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.send(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a request whose successful response carries no body
    pub async fn fetch_empty(&self, method: Method, url: Url) -> AppResult<()> {
        self.send(ApiRequest::new(method, url)).await?;
        Ok(())
    }

    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.execute(request).await?;
        if !response.status.is_success() {
            let detail = extract_detail(&response.body);
            tracing::warn!(
                "Backend responded with {}: {}",
                response.status,
                detail.as_deref().unwrap_or("<no detail>")
            );
            return Err(AppError::Http {
                status: response.status,
                detail,
            });
        }

        Ok(response)
    }
}

/// Pull the `detail` field out of an error body.
///
/// Non-string details (e.g. a list of field errors) are kept as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::transport::MockTransport;
    use super::*;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use tokio_test::{assert_err, assert_ok};

    #[derive(Debug, Deserialize)]
    struct Item {
        id: i64,
    }

    fn client(mock: MockTransport) -> ApiClient {
        ApiClient::new(Arc::new(mock), "http://localhost:8080/")
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let api = client(MockTransport::new());
        let url = assert_ok!(api.endpoint("/api/books"));
        assert_eq!(url.as_str(), "http://localhost:8080/api/books");
    }

    #[test]
    fn test_endpoint_with_query_encodes_value() {
        let api = client(MockTransport::new());
        let url = assert_ok!(api.endpoint_with_query("api/books", &[("search", "War & Peace")]));
        assert_eq!(url.query(), Some("search=War+%26+Peace"));

        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("search".to_string(), "War & Peace".to_string())]);
    }

    #[test]
    fn test_invalid_base_url() {
        let api = ApiClient::new(Arc::new(MockTransport::new()), "not a url");
        assert!(matches!(api.endpoint("api/books"), Err(AppError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_decodes_json() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_| Ok(ApiResponse::new(StatusCode::OK, r#"{"id":7}"#)));

        let api = client(mock);
        let url = api.endpoint("api/books/7").unwrap();
        let item: Item = assert_ok!(api.fetch(Method::GET, url, None).await);
        assert_eq!(item.id, 7);
    }

    #[tokio::test]
    async fn test_non_success_status_extracts_detail() {
        let mut mock = MockTransport::new();
        mock.expect_execute().returning(|_| {
            Ok(ApiResponse::new(
                StatusCode::NOT_FOUND,
                r#"{"detail":"Book not found"}"#,
            ))
        });

        let api = client(mock);
        let url = api.endpoint("api/books/99").unwrap();
        let err = assert_err!(api.fetch::<Item>(Method::GET, url, None).await);
        match err {
            AppError::Http { status, detail } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(detail.as_deref(), Some("Book not found"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .returning(|_| Ok(ApiResponse::new(StatusCode::OK, "<html>oops</html>")));

        let api = client(mock);
        let url = api.endpoint("api/books").unwrap();
        let err = assert_err!(api.fetch::<Vec<Item>>(Method::GET, url, None).await);
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_empty_accepts_no_content() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|req| req.method == Method::DELETE && req.body.is_none())
            .returning(|_| Ok(ApiResponse::new(StatusCode::NO_CONTENT, "")));

        let api = client(mock);
        let url = api.endpoint("api/books/highest").unwrap();
        assert_ok!(api.fetch_empty(Method::DELETE, url).await);
    }

    #[test]
    fn test_extract_detail_variants() {
        assert_eq!(
            extract_detail(r#"{"detail":"Author name is required"}"#).as_deref(),
            Some("Author name is required")
        );
        assert_eq!(
            extract_detail(r#"{"detail":[{"loc":["body","title"]}]}"#).as_deref(),
            Some(r#"[{"loc":["body","title"]}]"#)
        );
        assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
        assert_eq!(extract_detail("Internal Server Error"), None);
    }
}
