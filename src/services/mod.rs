pub mod aggregate_service;
pub mod chart_service;
pub mod dashboard_service;
pub mod filter_service;
pub mod live_rate_service;
pub mod source_service;

pub use dashboard_service::{Dashboard, DashboardEvent, DashboardSnapshot, SnapshotPage};
pub use live_rate_service::{LiveRate, LiveRateSimulator, PulsePhase};
pub use source_service::{JsonFileSource, MockTransactionSource, TransactionSource};
