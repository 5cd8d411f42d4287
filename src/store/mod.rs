//! The transaction store: an in-memory list mirrored from a remote source,
//! plus the subscription consumers use to follow it.

pub mod provider;
pub mod subscription;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use provider::{FetchOutcome, TransactionList, TransactionsProvider};
pub use subscription::Subscription;
pub use validation::ValidationRules;
