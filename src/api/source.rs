//! The port the store talks to. `TransactionsApiClient` is the HTTP adapter;
//! tests plug in in-memory sources.

use async_trait::async_trait;

use super::models::ApiError;
use crate::models::{NewTransaction, Transaction};

/// Remote store holding the authoritative transaction records
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// All transactions matching `query`, newest first
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError>;

    /// Persist a new transaction and return the stored record
    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError>;
}
