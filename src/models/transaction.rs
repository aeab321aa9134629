//! Transaction models

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::errors::DashboardError;

/// Monetary amount in rupees, held exactly as integer paise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_paise(paise: u64) -> Self {
        Amount(paise)
    }

    /// Round a rupee value to 2 decimals. Negative and non-finite inputs become zero.
    pub fn from_rupees(rupees: f64) -> Self {
        if !rupees.is_finite() || rupees <= 0.0 {
            return Amount::ZERO;
        }
        Amount((rupees * 100.0).round() as u64)
    }

    pub fn paise(&self) -> u64 {
        self.0
    }

    pub fn rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// Amounts travel as plain rupee numbers in JSON
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rupees())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Ok(Amount::from_rupees(rupees))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
    Refunded,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Success,
        TransactionStatus::Failed,
        TransactionStatus::Pending,
        TransactionStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Refunded => "REFUNDED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    /// Labels are accepted case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown status: '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Card,
    NetBanking,
    Wallet,
    #[serde(rename = "BNPL")]
    Bnpl,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
        PaymentMethod::Bnpl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "NetBanking",
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::Bnpl => "BNPL",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown payment method: '{}'", s))
    }
}

/// A single payment transaction. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    merchant: String,
    amount: Amount,
    status: TransactionStatus,
    method: PaymentMethod,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        merchant: impl Into<String>,
        amount: Amount,
        status: TransactionStatus,
        method: PaymentMethod,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DashboardError> {
        let txn = Transaction {
            id: id.into(),
            merchant: merchant.into(),
            amount,
            status,
            method,
            timestamp,
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Check the invariants a deserialized transaction skipped
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.id.trim().is_empty() {
            return Err(DashboardError::InvalidTransaction {
                id: self.id.clone(),
                reason: "id cannot be empty".to_string(),
            });
        }
        if self.amount.is_zero() {
            return Err(DashboardError::InvalidTransaction {
                id: self.id.clone(),
                reason: "amount must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn merchant(&self) -> &str {
        &self.merchant
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Short display timestamp, e.g. "07 Mar, 02:15 pm"
    pub fn date_label(&self) -> String {
        self.timestamp.format("%d %b, %I:%M %P").to_string()
    }
}

/// Ordered, id-unique sequence of transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionCollection {
    transactions: Vec<Transaction>,
}

impl TransactionCollection {
    pub fn new(transactions: Vec<Transaction>) -> Result<Self, DashboardError> {
        let mut seen = std::collections::HashSet::with_capacity(transactions.len());
        for txn in &transactions {
            txn.validate()?;
            if !seen.insert(txn.id()) {
                return Err(DashboardError::DuplicateTransaction(txn.id().to_string()));
            }
        }
        Ok(TransactionCollection { transactions })
    }

    pub fn empty() -> Self {
        TransactionCollection::default()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransactionCollection {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
