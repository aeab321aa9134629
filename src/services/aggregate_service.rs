use std::collections::HashMap;

use crate::models::{
    AggregateStats, Amount, CategoryCount, HourlyVolume, Kpis, StatusShare, Transaction,
    TransactionStatus,
};

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a percentage; 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Compute summary statistics in a single pass
pub fn aggregate<'a, I>(transactions: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut stats = AggregateStats::default();

    for txn in transactions {
        stats.total += 1;
        match txn.status() {
            TransactionStatus::Success => {
                stats.success += 1;
                stats.revenue = stats.revenue + txn.amount();
            }
            TransactionStatus::Failed => stats.failed += 1,
            TransactionStatus::Pending => stats.pending += 1,
            TransactionStatus::Refunded => stats.refunded += 1,
        }
    }

    stats.success_rate = round1(percent(stats.success, stats.total));
    stats
}

/// Count transactions per key, keeping categories in first-seen order
fn group_by<'a, I, F>(transactions: I, key: F) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&Transaction) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CategoryCount> = Vec::new();
    let mut total = 0usize;

    for txn in transactions {
        total += 1;
        let label = key(txn);
        match index.get(&label) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(CategoryCount {
                    label,
                    count: 1,
                    share: 0.0,
                });
            }
        }
    }

    for group in &mut groups {
        group.share = percent(group.count, total);
    }
    groups
}

pub fn distribution_by_method<'a, I>(transactions: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_by(transactions, |t| t.method().to_string())
}

pub fn distribution_by_status<'a, I>(transactions: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_by(transactions, |t| t.status().to_string())
}

pub fn distribution_by_merchant<'a, I>(transactions: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_by(transactions, |t| t.merchant().to_string())
}

/// Busiest merchants by transaction count; ties keep first-seen order
pub fn top_merchants<'a, I>(transactions: I, n: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut merchants = distribution_by_merchant(transactions);
    // sort_by is stable
    merchants.sort_by(|a, b| b.count.cmp(&a.count));
    merchants.truncate(n);
    merchants
}

/// Every status in canonical order with its percentage of the collection
pub fn status_shares(stats: &AggregateStats) -> Vec<StatusShare> {
    TransactionStatus::ALL
        .into_iter()
        .map(|status| {
            let count = match status {
                TransactionStatus::Success => stats.success,
                TransactionStatus::Failed => stats.failed,
                TransactionStatus::Pending => stats.pending,
                TransactionStatus::Refunded => stats.refunded,
            };
            StatusShare {
                status,
                count,
                percent: round1(percent(count, stats.total)),
            }
        })
        .collect()
}

/// Headline KPIs for the analytics view
pub fn kpis(stats: &AggregateStats, live_rate: f64, hourly: &[HourlyVolume]) -> Kpis {
    let average_transaction_value = if stats.success == 0 {
        Amount::ZERO
    } else {
        Amount::from_paise(stats.revenue.paise() / stats.success as u64)
    };

    Kpis {
        average_transaction_value,
        authorization_rate: live_rate,
        refund_rate: round1(percent(stats.refunded, stats.total)),
        peak_hour_volume: hourly.iter().map(|h| h.volume).max().unwrap_or(0),
    }
}
