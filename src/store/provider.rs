use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::subscription::Subscription;
use super::validation::ValidationRules;
use crate::api::TransactionSource;
use crate::error::{StoreError, StoreResult};
use crate::models::{CreateTransactionInput, Summary, Transaction};

/// Read-only snapshot of the transaction list, newest first
pub type TransactionList = Arc<Vec<Transaction>>;

/// What happened to the response of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list
    Applied,
    /// A later fetch was issued before this one resolved; the response was dropped
    Superseded,
}

struct Inner {
    source: Arc<dyn TransactionSource>,
    state: watch::Sender<TransactionList>,
    /// Sequence number of the most recently issued fetch
    latest_fetch: AtomicU64,
    rules: ValidationRules,
    initial_load: Mutex<Option<JoinHandle<StoreResult<FetchOutcome>>>>,
}

/// Owns the in-memory transaction list mirrored from a `TransactionSource`.
///
/// Cloning is cheap and every clone shares the same list. Hand a clone to
/// whatever needs to read the list or to fetch/create transactions.
#[derive(Clone)]
pub struct TransactionsProvider {
    inner: Arc<Inner>,
}

impl TransactionsProvider {
    /// Create the provider and start the initial, unfiltered fetch.
    ///
    /// The list stays empty until that fetch resolves; `ready` waits for it.
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn TransactionSource>, rules: ValidationRules) -> Self {
        let (state, _) = watch::channel(Arc::new(Vec::new()));
        let provider = Self {
            inner: Arc::new(Inner {
                source,
                state,
                latest_fetch: AtomicU64::new(0),
                rules,
                initial_load: Mutex::new(None),
            }),
        };

        // Numbered here, not in the task, so any fetch issued after `mount`
        // returns is newer than the initial one.
        let seq = provider.issue_fetch(None);
        let initial = provider.clone();
        let handle = tokio::spawn(async move { initial.resolve_fetch(seq, None).await });
        *provider
            .inner
            .initial_load
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);

        provider
    }

    /// Wait for the initial fetch started by `mount`.
    ///
    /// Only the first caller observes its result; later calls return `Ok`.
    pub async fn ready(&self) -> StoreResult<()> {
        let handle = self
            .inner
            .initial_load
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match handle {
            Some(handle) => match handle.await {
                Ok(result) => result.map(|_| ()),
                Err(e) => Err(StoreError::InitialLoad(e.to_string())),
            },
            None => Ok(()),
        }
    }

    /// Replace the list with the remote store's transactions matching `query`.
    ///
    /// `None` and `Some("")` both request the unfiltered list. On error the
    /// list is left as it was.
    pub async fn fetch(&self, query: Option<&str>) -> StoreResult<FetchOutcome> {
        let seq = self.issue_fetch(query);
        self.resolve_fetch(seq, query).await
    }

    /// Take the next fetch sequence number, making every earlier fetch stale
    fn issue_fetch(&self, query: Option<&str>) -> u64 {
        let seq = self.inner.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fetch #{} issued (query: {:?})", seq, query);
        seq
    }

    /// Request the list and apply it if `seq` is still the latest issued fetch
    async fn resolve_fetch(&self, seq: u64, query: Option<&str>) -> StoreResult<FetchOutcome> {
        let transactions = match self.inner.source.list(query).await {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!("Fetch #{} failed: {}", seq, e);
                return Err(e.into());
            }
        };

        let count = transactions.len();
        let applied = self.inner.state.send_if_modified(|list| {
            // Checked under the channel lock so a newer fetch cannot slip in
            // between the check and the replacement.
            if self.inner.latest_fetch.load(Ordering::SeqCst) != seq {
                return false;
            }
            *list = Arc::new(transactions);
            true
        });

        if applied {
            debug!("Fetch #{} applied ({} transactions)", seq, count);
            Ok(FetchOutcome::Applied)
        } else {
            debug!("Fetch #{} superseded, response dropped", seq);
            Ok(FetchOutcome::Superseded)
        }
    }

    /// Submit a new transaction and put the stored record at the head of the list.
    ///
    /// `createdAt` is stamped here with the current time. The record returned
    /// by the remote store is what gets inserted and returned.
    pub async fn create(&self, input: CreateTransactionInput) -> StoreResult<Transaction> {
        self.inner.rules.validate(&input)?;

        let body = input.stamp(Utc::now());
        debug!("Creating transaction '{}' ({})", body.description, body.kind);

        let created = match self.inner.source.create(&body).await {
            Ok(created) => created,
            Err(e) => {
                warn!("Create '{}' failed: {}", body.description, e);
                return Err(e.into());
            }
        };

        if created.created_at != body.created_at {
            debug!(
                "Store returned createdAt {} for transaction {} (sent {})",
                created.created_at, created.id, body.created_at
            );
        }

        let head = created.clone();
        self.inner
            .state
            .send_modify(|list| Arc::make_mut(list).insert(0, head));

        Ok(created)
    }

    /// Current snapshot of the list
    pub fn transactions(&self) -> TransactionList {
        self.inner.state.borrow().clone()
    }

    /// Apply `selector` to the current list
    pub fn select<T>(&self, selector: impl FnOnce(&[Transaction]) -> T) -> T {
        selector(self.inner.state.borrow().as_slice())
    }

    /// Income, outcome and total over the current list
    pub fn summary(&self) -> Summary {
        self.select(Summary::from_transactions)
    }

    /// Subscribe to list changes
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.inner.state.subscribe())
    }
}
