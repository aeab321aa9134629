//! Aggregate statistics models

use serde::Serialize;

use super::transaction::{Amount, TransactionStatus};

/// Read-only summary over a transaction collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub pending: usize,
    pub refunded: usize,
    /// Sum of SUCCESS amounts only
    pub revenue: Amount,
    /// Percentage rounded to one decimal, 0 for an empty collection
    pub success_rate: f64,
}

/// One category of a grouped distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    /// Percentage of the grouped total
    pub share: f64,
}

/// Share of a single status across the collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: TransactionStatus,
    pub count: usize,
    pub percent: f64,
}

/// Headline figures for the analytics view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub average_transaction_value: Amount,
    pub authorization_rate: f64,
    pub refund_rate: f64,
    pub peak_hour_volume: u32,
}
