//! Transaction models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a transaction. The price itself is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    /// +1.0 for income, -1.0 for outcome
    pub fn sign(&self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Outcome => -1.0,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Outcome => write!(f, "outcome"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            other => Err(format!("unknown transaction type '{}', expected income or outcome", other)),
        }
    }
}

/// A transaction as stored by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub price: f64,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Transaction {
    /// Price with the sign implied by the transaction type
    pub fn signed_amount(&self) -> f64 {
        self.price * self.kind.sign()
    }

    /// Parse `created_at`, if the server sent something RFC 3339 shaped
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Caller-supplied fields for a new transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionInput {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl CreateTransactionInput {
    pub fn new(
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            description: description.into(),
            price,
            category: category.into(),
            kind,
        }
    }

    /// Attach a creation timestamp, producing the POST body
    pub fn stamp(self, at: DateTime<Utc>) -> NewTransaction {
        NewTransaction {
            description: self.description,
            price: self.price,
            category: self.category,
            kind: self.kind,
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Request body for POST /transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_transaction_uses_api_field_names() {
        let json = r#"{
            "id": 7,
            "description": "Salary",
            "type": "income",
            "price": 5000,
            "category": "Work",
            "createdAt": "2024-03-01T12:00:00.000Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.price, 5000.0);
        assert_eq!(tx.created_at_utc().unwrap(), Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_unparseable_created_at_is_kept_as_text() {
        let json = r#"{"id":1,"description":"x","type":"outcome","price":1,"category":"c","createdAt":"yesterday"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.created_at, "yesterday");
        assert!(tx.created_at_utc().is_none());
    }

    #[test]
    fn test_signed_amount() {
        let input = CreateTransactionInput::new("Lunch", 20.0, "Food", TransactionType::Outcome);
        let tx = Transaction {
            id: 1,
            description: input.description,
            kind: input.kind,
            price: input.price,
            category: input.category,
            created_at: String::new(),
        };
        assert_eq!(tx.signed_amount(), -20.0);
    }

    #[test]
    fn test_stamp_serializes_created_at_with_millis() {
        let at = Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap();
        let body = CreateTransactionInput::new("Lunch", 20.0, "Food", TransactionType::Outcome).stamp(at);

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["createdAt"], "2024-05-02T08:30:00.000Z");
        assert_eq!(value["type"], "outcome");
        assert_eq!(value["description"], "Lunch");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!(" outcome ".parse::<TransactionType>().unwrap(), TransactionType::Outcome);
        assert!("refund".parse::<TransactionType>().is_err());
    }
}
