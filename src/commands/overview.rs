use crate::models::DonutChart;
use crate::services::chart_service;
use crate::services::{Dashboard, LiveRate};
use crate::utils::format;

use super::render_live;
use super::transaction::transaction_table;

const BAR_WIDTH: usize = 24;
const RECENT_ROWS: usize = 5;

/// Horizontal text bar whose length follows the computed pixel height
pub(crate) fn text_bar(height: f64, max_height: f64) -> String {
    let cells = if max_height <= 0.0 {
        0
    } else {
        ((height / max_height) * BAR_WIDTH as f64).round().max(1.0) as usize
    };
    "█".repeat(cells.min(BAR_WIDTH))
}

/// Summary cards, weekly volume, payment methods and recent transactions
pub fn execute(dashboard: &Dashboard, live: &LiveRate) -> String {
    let charts = dashboard.config().charts;
    let stats = dashboard.stats();
    let mut out = String::new();

    out.push_str(&format!("⚡ HyperPay Analytics    {}\n\n", render_live(live)));

    // Card sparklines come from the first 12 hours of the hourly series
    let first_half: Vec<f64> = dashboard.hourly().iter().take(12).map(|h| h.volume as f64).collect();
    let success_half: Vec<f64> = dashboard.hourly().iter().take(12).map(|h| h.success as f64).collect();
    let rate_trend: Vec<f64> = first_half.iter().map(|v| v / 10.0).collect();
    let failure_trend: Vec<f64> = first_half.iter().map(|v| 20.0 - v / 50.0).collect();

    let cards = [
        ("Total Transactions", format::count(stats.total as u64), &first_half),
        ("Revenue", format::lakhs(stats.revenue), &success_half),
        ("Success Rate", format!("{}%", stats.success_rate), &rate_trend),
        ("Failed Txns", format::count(stats.failed as u64), &failure_trend),
    ];
    for (label, value, series) in cards {
        let spark = chart_service::sparkline(series, charts.sparkline_width, charts.sparkline_height);
        out.push_str(&format!("{:<20} {:>10}   {}\n", label, value, chart_service::svg_points(&spark.line)));
    }

    out.push_str("\nWeekly Transaction Volume (last 7 days)\n");
    let weekly: Vec<(String, f64)> = dashboard
        .weekly()
        .iter()
        .map(|w| (w.day.clone(), w.txn as f64))
        .collect();
    for bar in chart_service::bars(&weekly, charts.bar_max_height, charts.bar_min_height) {
        out.push_str(&format!(
            "  {:<4} {:<width$} {}\n",
            bar.label,
            text_bar(bar.height, charts.bar_max_height),
            format::count(bar.value as u64),
            width = BAR_WIDTH
        ));
    }

    out.push_str("\nPayment Methods\n");
    match dashboard.method_donut() {
        DonutChart::Segments { total, arcs } => {
            for arc in &arcs {
                out.push_str(&format!(
                    "  {:<11} {:>3}  {:>5.1}%  {}\n",
                    arc.label,
                    arc.value as u64,
                    arc.share * 100.0,
                    arc.path
                ));
            }
            out.push_str(&format!("  total {}\n", total as u64));
        }
        DonutChart::Neutral { .. } => out.push_str("  no transactions\n"),
    }

    out.push_str("\nRecent Transactions\n");
    let recent = dashboard.recent(RECENT_ROWS);
    if recent.is_empty() {
        out.push_str("No transactions yet");
    } else {
        out.push_str(&transaction_table(recent).render());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::transaction::fixtures::{collection, txn};
    use crate::models::{PaymentMethod, TransactionStatus};
    use crate::services::source_service::weekly_series;

    #[test]
    fn test_text_bar_scales() {
        assert_eq!(text_bar(70.0, 70.0).chars().count(), BAR_WIDTH);
        assert_eq!(text_bar(35.0, 70.0).chars().count(), BAR_WIDTH / 2);
        // minimum-height bars still show one cell
        assert_eq!(text_bar(2.0, 70.0).chars().count(), 1);
    }

    #[test]
    fn test_overview_sections() {
        let txns = vec![
            txn("TXN001000", "Amazon", 250000.0, TransactionStatus::Success, PaymentMethod::Upi),
            txn("TXN001001", "Ola", 80.0, TransactionStatus::Failed, PaymentMethod::Card),
        ];
        let d = Dashboard::new(DashboardConfig::default(), collection(txns), Vec::new(), weekly_series());
        let text = execute(&d, &LiveRate::new(98.2));
        assert!(text.contains("98.2% SR LIVE"));
        assert!(text.contains("₹2.50L"));
        assert!(text.contains("50%"));
        assert!(text.contains("Sat"));
        assert!(text.contains("UPI"));
        assert!(text.contains("TXN001001"));
    }
}
