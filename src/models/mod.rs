//! Data models for the dashboard core
//!
//! Domain records (transactions), filter criteria, derived statistics and the
//! chart primitives handed to renderers.

pub mod transaction;
pub mod filter;
pub mod stats;
pub mod chart;
pub mod series;

// Re-export commonly used types for convenience
pub use transaction::{Amount, PaymentMethod, Transaction, TransactionCollection, TransactionStatus};
pub use filter::{FilterCriteria, Selection, WILDCARD};
pub use stats::{AggregateStats, CategoryCount, Kpis, StatusShare};
pub use chart::{Bar, DonutArc, DonutChart, DonutGeometry, DonutSegment, Point, Sparkline};
pub use series::{HourlyVolume, WeeklyVolume};
