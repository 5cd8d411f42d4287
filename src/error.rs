//! Errors surfaced by the transaction store

use thiserror::Error;

use crate::api::ApiError;

/// A create input rejected by the configured validation rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("category must not be empty")]
    EmptyCategory,
    #[error("price must be a positive number, got {0}")]
    InvalidPrice(f64),
}

/// Every way a store operation can fail to complete
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transaction provider was dropped")]
    ProviderClosed,

    #[error("Initial load did not complete: {0}")]
    InitialLoad(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
