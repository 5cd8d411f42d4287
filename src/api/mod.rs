pub mod client;
pub mod models;
pub mod source;

pub use client::TransactionsApiClient;
pub use models::{ApiError, ListQuery};
pub use source::TransactionSource;
