//! Filter criteria models

use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::transaction::{PaymentMethod, TransactionStatus};

/// Wildcard label accepted by status and method filters
pub const WILDCARD: &str = "ALL";

/// One filter slot: wildcard, exact value, or a label outside the enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
    /// Never matches anything
    Unrecognized(String),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: FromStr> Selection<T> {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(WILDCARD) {
            return Selection::All;
        }
        match raw.parse::<T>() {
            Ok(value) => Selection::Only(value),
            Err(_) => Selection::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
            Selection::Unrecognized(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str(WILDCARD),
            Selection::Only(value) => write!(f, "{}", value),
            Selection::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

// Serialized as the label the user picked
impl<T: std::fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Active search text plus status and method selections
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    pub search: String,
    pub status: Selection<TransactionStatus>,
    pub method: Selection<PaymentMethod>,
}

impl FilterCriteria {
    pub fn new(search: &str, status: &str, method: &str) -> Self {
        FilterCriteria {
            search: search.to_string(),
            status: Selection::parse(status),
            method: Selection::parse(method),
        }
    }

    /// True when no predicate narrows the view
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.status.is_all() && self.method.is_all()
    }

    /// Tuple of active values identifying the filtered view
    pub fn fingerprint(&self) -> (String, String, String) {
        (self.search.clone(), self.status.to_string(), self.method.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::<TransactionStatus>::parse("ALL"), Selection::All);
        assert_eq!(Selection::<TransactionStatus>::parse("all"), Selection::All);
        assert_eq!(
            Selection::<TransactionStatus>::parse("FAILED"),
            Selection::Only(TransactionStatus::Failed)
        );
        assert_eq!(
            Selection::<PaymentMethod>::parse("Cheque"),
            Selection::Unrecognized("Cheque".to_string())
        );
    }

    #[test]
    fn test_unrecognized_never_matches() {
        let selection = Selection::<PaymentMethod>::parse("Cheque");
        for method in PaymentMethod::ALL {
            assert!(!selection.matches(&method));
        }
    }

    #[test]
    fn test_fingerprint() {
        let criteria = FilterCriteria::new("amaz", "SUCCESS", "ALL");
        assert_eq!(
            criteria.fingerprint(),
            ("amaz".to_string(), "SUCCESS".to_string(), "ALL".to_string())
        );
        assert!(!criteria.is_unfiltered());
        assert!(FilterCriteria::default().is_unfiltered());
    }
}
