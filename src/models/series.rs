//! Time-bucketed volume series used by the charts

use serde::{Deserialize, Serialize};

/// Volume for one hour of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub hour: String,
    pub volume: u32,
    pub success: u32,
}

/// Transaction count and revenue for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    pub day: String,
    pub txn: u32,
    pub revenue: u64,
}
