use tokio::sync::watch;

use super::provider::TransactionList;
use crate::error::{StoreError, StoreResult};
use crate::models::Transaction;

/// A consumer's view of a `TransactionsProvider`.
///
/// Reads never block the provider; waiting methods resolve once the provider
/// replaces or prepends to the list.
pub struct Subscription {
    receiver: watch::Receiver<TransactionList>,
}

impl Subscription {
    pub(crate) fn new(receiver: watch::Receiver<TransactionList>) -> Self {
        Self { receiver }
    }

    /// Latest snapshot of the list
    pub fn current(&self) -> TransactionList {
        self.receiver.borrow().clone()
    }

    /// Apply `selector` to the latest snapshot
    pub fn select<T>(&self, selector: impl FnOnce(&[Transaction]) -> T) -> T {
        selector(self.receiver.borrow().as_slice())
    }

    /// Wait for the next change to the list and return the new snapshot
    pub async fn changed(&mut self) -> StoreResult<TransactionList> {
        self.receiver
            .changed()
            .await
            .map_err(|_| StoreError::ProviderClosed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    /// Wait until `selector` yields something different from what it yields now.
    ///
    /// List changes that leave the selected value equal are skipped.
    pub async fn next_selected<T, F>(&mut self, mut selector: F) -> StoreResult<T>
    where
        F: FnMut(&[Transaction]) -> T,
        T: PartialEq,
    {
        let before = selector(self.receiver.borrow_and_update().as_slice());
        loop {
            self.receiver
                .changed()
                .await
                .map_err(|_| StoreError::ProviderClosed)?;
            let after = selector(self.receiver.borrow_and_update().as_slice());
            if after != before {
                return Ok(after);
            }
        }
    }
}
