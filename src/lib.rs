//! In-memory transaction store mirrored from a json-server style finance API.
//!
//! [`TransactionsProvider`] owns the list, [`Subscription`] follows it, and
//! [`TransactionsApiClient`] is the HTTP side.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

pub use api::{ApiError, TransactionSource, TransactionsApiClient};
pub use config::Config;
pub use error::{StoreError, StoreResult, ValidationError};
pub use models::{CreateTransactionInput, Summary, Transaction, TransactionType};
pub use store::{FetchOutcome, Subscription, TransactionList, TransactionsProvider, ValidationRules};
