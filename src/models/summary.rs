//! Summary models

use super::transaction::{Transaction, TransactionType};

/// Totals over a list of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();
        for tx in transactions {
            match tx.kind {
                TransactionType::Income => summary.income += tx.price,
                TransactionType::Outcome => summary.outcome += tx.price,
            }
        }
        summary.total = summary.income - summary.outcome;
        summary
    }
}
