use crate::services::chart_service;
use crate::services::{Dashboard, LiveRate};
use crate::utils::format;
use crate::utils::{Align, Table};

use super::overview::text_bar;

/// Hourly volume, status distribution, top merchants and KPIs
pub fn execute(dashboard: &Dashboard, live: &LiveRate) -> String {
    let charts = dashboard.config().charts;
    let mut out = String::new();

    out.push_str("Hourly Transaction Volume\n");
    let hourly: Vec<(String, f64)> = dashboard
        .hourly()
        .iter()
        .map(|h| (h.hour.clone(), h.volume as f64))
        .collect();
    if hourly.is_empty() {
        out.push_str("  no hourly data\n");
    }
    for bar in chart_service::bars(&hourly, charts.hourly_bar_max_height, charts.bar_min_height) {
        out.push_str(&format!(
            "  {} {} {}\n",
            bar.label,
            text_bar(bar.height, charts.hourly_bar_max_height),
            bar.value as u64
        ));
    }

    out.push_str("\nStatus Distribution\n");
    for share in dashboard.status_shares() {
        out.push_str(&format!("  {:<9} {:>5.1}%  ({})\n", share.status.as_str(), share.percent, share.count));
    }

    out.push_str("\nTop Merchants by Volume\n");
    for (rank, merchant) in dashboard.top_merchants().iter().enumerate() {
        out.push_str(&format!("  {:>2} {:<12} {} txns\n", rank + 1, merchant.label, merchant.count));
    }

    out.push_str("\nPerformance KPIs\n");
    let kpis = dashboard.kpis(live.rate);
    let mut table = Table::new(&["KPI", "Value"]).align(1, Align::Right);
    table.add_row(vec![
        "Avg Transaction Value".to_string(),
        format::rupees_whole(kpis.average_transaction_value),
    ]);
    table.add_row(vec!["Authorization Rate".to_string(), format!("{}%", kpis.authorization_rate)]);
    table.add_row(vec!["Refund Rate".to_string(), format!("{:.1}%", kpis.refund_rate)]);
    table.add_row(vec!["Peak Hour Volume".to_string(), format!("{} txns", kpis.peak_hour_volume)]);
    out.push_str(&table.render());

    out
}
