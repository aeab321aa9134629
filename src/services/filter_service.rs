use crate::models::{FilterCriteria, Transaction};

/// Check a single transaction against every predicate of `criteria`
pub fn matches(txn: &Transaction, criteria: &FilterCriteria) -> bool {
    matches_search(txn, &criteria.search)
        && criteria.status.matches(&txn.status())
        && criteria.method.matches(&txn.method())
}

/// Case-insensitive substring match on merchant name or transaction id
pub fn matches_search(txn: &Transaction, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    txn.id().to_uppercase().contains(&search.to_uppercase())
        || txn.merchant().to_lowercase().contains(&search.to_lowercase())
}

/// Stable filter: keeps the original relative order of matching transactions
///
/// Accepts anything yielding `&Transaction`, so an already filtered view can be
/// filtered again.
pub fn filter<'a, I>(transactions: I, criteria: &FilterCriteria) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| matches(txn, criteria))
        .collect()
}
