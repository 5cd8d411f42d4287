use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Request, StatusCode};
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse, ListQuery};
use super::source::TransactionSource;
use crate::models::{NewTransaction, Transaction};

/// HTTP client for the json-server style transactions API
pub struct TransactionsApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl TransactionsApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3333";

    /// Create a client against the given base URL, without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transactions_url(&self) -> String {
        format!("{}/transactions", self.base_url)
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn list_request(&self, query: Option<&str>) -> Result<Request, ApiError> {
        self.http_client
            .get(self.transactions_url())
            .headers(Self::create_headers())
            .query(&ListQuery::newest_first(query))
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build request: {}", e)))
    }

    fn create_request(&self, transaction: &NewTransaction) -> Result<Request, ApiError> {
        self.http_client
            .post(self.transactions_url())
            .headers(Self::create_headers())
            .json(transaction)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build request: {}", e)))
    }

    /// Send a request and decode a successful JSON body as `T`
    async fn execute<T: serde::de::DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        debug!("{} {}", request.method(), request.url());

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(classify_error(status, body_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Map a non-2xx status and its body to an `ApiError`
fn classify_error(status: StatusCode, body_text: String) -> ApiError {
    let status_code = status.as_u16();

    match status_code {
        400 => {
            // json-server and most validators put the reason under "message"
            match serde_json::from_str::<ErrorResponse>(&body_text) {
                Ok(ErrorResponse { message: Some(message), .. }) => ApiError::BadRequest(message),
                Ok(ErrorResponse { error: Some(error), .. }) => ApiError::BadRequest(error),
                _ => ApiError::BadRequest(body_text),
            }
        }
        401 => ApiError::Unauthorized(body_text),
        403 => ApiError::Forbidden(body_text),
        404 => ApiError::NotFound(body_text),
        500..=599 => {
            warn!("Server error {}: {}", status_code, body_text);
            ApiError::ServerError(status_code, body_text)
        }
        _ => ApiError::HttpError(status_code, body_text),
    }
}

#[async_trait]
impl TransactionSource for TransactionsApiClient {
    /// GET /transactions?_sort=createdAt&_order=desc&q={query}
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        let request = self.list_request(query)?;
        self.execute(request).await
    }

    /// POST /transactions
    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let request = self.create_request(transaction)?;
        self.execute(request).await
    }
}
