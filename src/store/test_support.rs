//! In-memory `TransactionSource` for store tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{ApiError, TransactionSource};
use crate::models::{NewTransaction, Transaction, TransactionType};

pub fn sample(id: u64) -> Transaction {
    Transaction {
        id,
        description: format!("transaction {}", id),
        kind: if id % 2 == 0 { TransactionType::Income } else { TransactionType::Outcome },
        price: id as f64 * 10.0,
        category: "misc".to_string(),
        created_at: format!("2024-01-{:02}T00:00:00.000Z", id % 28 + 1),
    }
}

/// Lists are keyed by query (`""` for unfiltered). Gates hold a call open
/// until the matching sender fires.
#[derive(Default)]
pub struct FakeSource {
    lists: Mutex<HashMap<String, Vec<Transaction>>>,
    list_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    create_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    fail_lists: AtomicBool,
    fail_creates: AtomicBool,
    queries: Mutex<Vec<Option<String>>>,
    created: Mutex<Vec<NewTransaction>>,
    next_id: AtomicU64,
}

impl FakeSource {
    pub fn set_list(&self, query: &str, transactions: Vec<Transaction>) {
        self.lists.lock().unwrap().insert(query.to_string(), transactions);
    }

    pub fn gate_list(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }

    pub fn gate_create(&self, description: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.create_gates.lock().unwrap().insert(description.to_string(), rx);
        tx
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewTransaction> {
        self.created.lock().unwrap().clone()
    }

    pub async fn wait_for_list_calls(&self, calls: usize) {
        while self.queries.lock().unwrap().len() < calls {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl TransactionSource for FakeSource {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        self.queries.lock().unwrap().push(query.map(str::to_string));

        let key = query.unwrap_or("").to_string();
        let gate = self.list_gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(ApiError::ServerError(500, "list failed".to_string()));
        }
        Ok(self.lists.lock().unwrap().get(&key).cloned().unwrap_or_default())
    }

    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let gate = self.create_gates.lock().unwrap().remove(&transaction.description);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(ApiError::BadRequest("create failed".to_string()));
        }
        self.created.lock().unwrap().push(transaction.clone());

        Ok(Transaction {
            id: 1000 + self.next_id.fetch_add(1, Ordering::SeqCst),
            description: transaction.description.clone(),
            kind: transaction.kind,
            price: transaction.price,
            category: transaction.category.clone(),
            created_at: transaction.created_at.clone(),
        })
    }
}
