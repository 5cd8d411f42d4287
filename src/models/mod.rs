//! Data models shared by the API client and the store
//!
//! `transaction` mirrors the remote API's JSON shapes; `summary` holds values
//! derived from a transaction list.

pub mod transaction;
pub mod summary;

// Re-export commonly used types for convenience
pub use transaction::{CreateTransactionInput, NewTransaction, Transaction, TransactionType};
pub use summary::Summary;
