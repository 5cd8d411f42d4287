use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query string for GET /transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(rename = "_sort")]
    pub sort: &'static str,
    #[serde(rename = "_order")]
    pub order: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ListQuery {
    /// Newest first, optionally filtered. An empty filter is the same as none.
    pub fn newest_first(filter: Option<&str>) -> Self {
        Self {
            sort: "createdAt",
            order: "desc",
            q: filter.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }
}

/// Error response from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Comprehensive error type for API operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
