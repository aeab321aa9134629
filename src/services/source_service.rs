use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::models::{
    Amount, HourlyVolume, PaymentMethod, Transaction, TransactionCollection, TransactionStatus,
    WeeklyVolume,
};
use crate::utils::errors::DashboardError;

pub const MOCK_MERCHANTS: [&str; 8] = [
    "Swiggy",
    "Zomato",
    "Amazon",
    "Flipkart",
    "Myntra",
    "BigBasket",
    "PhonePe",
    "Ola",
];

/// Anything that can hand the dashboard a well-formed transaction collection
pub trait TransactionSource {
    fn load(&self) -> Result<TransactionCollection, DashboardError>;
}

/// Mock transaction id, e.g. index 0 -> "TXN001000"
pub fn mock_transaction_id(index: usize) -> String {
    format!("TXN{:06}", 1000 + index)
}

/// Synthetic transactions drawn from a seeded generator
pub struct MockTransactionSource {
    count: usize,
    seed: u64,
    now: DateTime<Utc>,
}

impl MockTransactionSource {
    pub fn new(count: usize, seed: u64) -> Self {
        Self::with_clock(count, seed, Utc::now())
    }

    /// Generate timestamps relative to a fixed `now` (for tests)
    pub fn with_clock(count: usize, seed: u64, now: DateTime<Utc>) -> Self {
        MockTransactionSource { count, seed, now }
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Transaction>, DashboardError> {
        let week_ms = Duration::days(7).num_milliseconds();
        let mut transactions = Vec::with_capacity(self.count);

        for i in 0..self.count {
            let status = *TransactionStatus::ALL
                .choose(rng)
                .unwrap_or(&TransactionStatus::Success);
            let merchant = MOCK_MERCHANTS.choose(rng).copied().unwrap_or("Swiggy");
            let method = *PaymentMethod::ALL.choose(rng).unwrap_or(&PaymentMethod::Upi);
            let amount = Amount::from_rupees(rng.gen_range(100.0..10_000.0));
            let timestamp = self.now - Duration::milliseconds(rng.gen_range(0..week_ms));

            transactions.push(Transaction::new(
                mock_transaction_id(i),
                merchant,
                amount,
                status,
                method,
                timestamp,
            )?);
        }

        Ok(transactions)
    }
}

impl TransactionSource for MockTransactionSource {
    fn load(&self) -> Result<TransactionCollection, DashboardError> {
        use rand::SeedableRng;

        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        let transactions = self.generate(&mut rng)?;
        info!("Generated {} mock transactions (seed {})", transactions.len(), self.seed);
        TransactionCollection::new(transactions)
    }
}

/// Transactions read from a JSON array on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TransactionSource for JsonFileSource {
    fn load(&self) -> Result<TransactionCollection, DashboardError> {
        debug!("Reading transactions from {}", self.path.display());
        let raw = std::fs::read_to_string(&self.path)?;
        let collection = parse_transactions(&raw)?;
        info!("Loaded {} transactions from {}", collection.len(), self.path.display());
        Ok(collection)
    }
}

/// Parse and validate a JSON array of transactions
pub fn parse_transactions(json: &str) -> Result<TransactionCollection, DashboardError> {
    let transactions: Vec<Transaction> = serde_json::from_str(json)?;
    TransactionCollection::new(transactions)
}

/// Random hourly volumes for the 24 hours of a day
pub fn mock_hourly_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyVolume> {
    (0..24)
        .map(|hour| HourlyVolume {
            hour: format!("{:02}:00", hour),
            volume: rng.gen_range(100..900),
            success: rng.gen_range(80..780),
        })
        .collect()
}

/// Fixed weekly transaction volume and revenue, Monday first
pub fn weekly_series() -> Vec<WeeklyVolume> {
    [
        ("Mon", 1240, 284_000),
        ("Tue", 1890, 412_000),
        ("Wed", 1560, 335_000),
        ("Thu", 2100, 489_000),
        ("Fri", 2450, 563_000),
        ("Sat", 3200, 712_000),
        ("Sun", 2800, 634_000),
    ]
    .into_iter()
    .map(|(day, txn, revenue)| WeeklyVolume {
        day: day.to_string(),
        txn,
        revenue,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_mock_ids() {
        assert_eq!(mock_transaction_id(0), "TXN001000");
        assert_eq!(mock_transaction_id(39), "TXN001039");
    }

    #[test]
    fn test_mock_source_is_well_formed() {
        let now = fixed_now();
        let data = MockTransactionSource::with_clock(40, 42, now).load().unwrap();
        assert_eq!(data.len(), 40);
        for (i, txn) in data.iter().enumerate() {
            assert_eq!(txn.id(), mock_transaction_id(i));
            assert!(MOCK_MERCHANTS.contains(&txn.merchant()));
            assert!(txn.amount() >= Amount::from_rupees(100.0));
            assert!(txn.amount() <= Amount::from_rupees(10_000.0));
            assert!(txn.timestamp() <= now);
            assert!(txn.timestamp() > now - Duration::days(7));
        }
    }

    #[test]
    fn test_mock_source_is_deterministic_per_seed() {
        let now = fixed_now();
        let a = MockTransactionSource::with_clock(10, 7, now).load().unwrap();
        let b = MockTransactionSource::with_clock(10, 7, now).load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_transactions_from_json() {
        let json = r#"[
            {"id": "TXN001000", "merchant": "Amazon", "amount": 120.5, "status": "SUCCESS",
             "method": "UPI", "timestamp": "2024-03-07T14:15:00Z"},
            {"id": "TXN001001", "merchant": "Ola", "amount": 80, "status": "FAILED",
             "method": "NetBanking", "timestamp": "2024-03-07T15:00:00Z"}
        ]"#;
        let data = parse_transactions(json).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.as_slice()[0].amount(), Amount::from_paise(12050));
        assert_eq!(data.as_slice()[1].method(), PaymentMethod::NetBanking);
    }

    #[test]
    fn test_parse_rejects_invalid_rows() {
        let zero_amount = r#"[{"id": "T1", "merchant": "Ola", "amount": 0, "status": "SUCCESS",
            "method": "UPI", "timestamp": "2024-03-07T14:15:00Z"}]"#;
        assert!(matches!(
            parse_transactions(zero_amount),
            Err(DashboardError::InvalidTransaction { .. })
        ));

        let bad_status = r#"[{"id": "T1", "merchant": "Ola", "amount": 5, "status": "LOST",
            "method": "UPI", "timestamp": "2024-03-07T14:15:00Z"}]"#;
        assert!(matches!(parse_transactions(bad_status), Err(DashboardError::Json(_))));
    }

    #[test]
    fn test_sample_data_file_loads() {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("data/sample_transactions.json");
        let data = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(data.len(), 6);
        assert_eq!(data.as_slice()[4].status(), TransactionStatus::Refunded);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/hyperpay/transactions.json");
        assert!(matches!(source.load(), Err(DashboardError::Io(_))));
    }

    #[test]
    fn test_hourly_series_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let hourly = mock_hourly_series(&mut rng);
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly[0].hour, "00:00");
        assert_eq!(hourly[23].hour, "23:00");
        assert!(hourly.iter().all(|h| (100..900).contains(&h.volume)));
    }

    #[test]
    fn test_weekly_series() {
        let weekly = weekly_series();
        assert_eq!(weekly.len(), 7);
        assert_eq!(weekly[0].day, "Mon");
        assert_eq!(weekly[5].txn, 3200);
    }
}
