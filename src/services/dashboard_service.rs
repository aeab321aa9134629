use serde::Serialize;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::{
    AggregateStats, CategoryCount, DonutChart, DonutSegment, FilterCriteria, HourlyVolume, Kpis,
    PaymentMethod, Selection, StatusShare, Transaction, TransactionCollection, TransactionStatus,
    WeeklyVolume,
};
use crate::services::{aggregate_service, chart_service, filter_service};
use crate::utils::page::{paginate, total_pages, PageState};

/// User input that changes what the transaction table shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    Search(String),
    StatusFilter(String),
    MethodFilter(String),
    ClearFilters,
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

/// The current page of the filtered table
#[derive(Debug, Serialize)]
pub struct SnapshotPage<'a> {
    pub items: Vec<&'a Transaction>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub stats: AggregateStats,
    pub criteria: &'a FilterCriteria,
    pub filtered_count: usize,
    pub page: SnapshotPage<'a>,
    pub method_distribution: Vec<CategoryCount>,
    pub status_shares: Vec<StatusShare>,
    pub top_merchants: Vec<CategoryCount>,
    pub method_donut: DonutChart,
    pub kpis: Kpis,
}

/// Owns the collection plus filter and page state, and derives every view from them
///
/// Each event is applied as one transition (criteria, then page repair, then
/// re-filtering) before any view can be read.
pub struct Dashboard {
    config: DashboardConfig,
    collection: TransactionCollection,
    hourly: Vec<HourlyVolume>,
    weekly: Vec<WeeklyVolume>,
    criteria: FilterCriteria,
    page: PageState,
    stats: AggregateStats,
    /// Indices into `collection` that pass `criteria`, in collection order
    filtered: Vec<usize>,
}

impl Dashboard {
    pub fn new(
        config: DashboardConfig,
        collection: TransactionCollection,
        hourly: Vec<HourlyVolume>,
        weekly: Vec<WeeklyVolume>,
    ) -> Self {
        let page = PageState::new(config.page_size);
        let mut dashboard = Dashboard {
            config,
            collection,
            hourly,
            weekly,
            criteria: FilterCriteria::default(),
            page,
            stats: AggregateStats::default(),
            filtered: Vec::new(),
        };
        dashboard.recompute_stats();
        dashboard.refilter();
        dashboard
    }

    /// Swap in a freshly loaded collection, keeping the criteria
    pub fn replace_collection(&mut self, collection: TransactionCollection) {
        self.collection = collection;
        self.recompute_stats();
        self.refilter();
        self.page.clamp(self.total_pages());
    }

    /// Apply one user event. Returns false when nothing changed.
    pub fn apply(&mut self, event: DashboardEvent) -> bool {
        debug!("Applying dashboard event: {:?}", event);
        let changed = match event {
            DashboardEvent::Search(text) => {
                let changed = self.criteria.search != text;
                self.criteria.search = text;
                changed
            }
            DashboardEvent::StatusFilter(raw) => {
                let status = Selection::<TransactionStatus>::parse(&raw);
                let changed = self.criteria.status != status;
                self.criteria.status = status;
                changed
            }
            DashboardEvent::MethodFilter(raw) => {
                let method = Selection::<PaymentMethod>::parse(&raw);
                let changed = self.criteria.method != method;
                self.criteria.method = method;
                changed
            }
            DashboardEvent::ClearFilters => {
                let changed = !self.criteria.is_unfiltered();
                self.criteria = FilterCriteria::default();
                changed
            }
            DashboardEvent::GoToPage(page) => {
                let before = self.page.current_page;
                self.page.go_to(page, self.total_pages());
                return before != self.page.current_page;
            }
            DashboardEvent::NextPage => return self.page.next(self.total_pages()),
            DashboardEvent::PreviousPage => return self.page.previous(),
        };

        // Any criteria event lands back on page 1
        let was_first = self.page.is_first();
        self.page.reset();
        if changed {
            self.refilter();
        }
        changed || !was_first
    }

    fn recompute_stats(&mut self) {
        self.stats = aggregate_service::aggregate(&self.collection);
    }

    fn refilter(&mut self) {
        let criteria = &self.criteria;
        self.filtered = self
            .collection
            .iter()
            .enumerate()
            .filter(|(_, txn)| filter_service::matches(txn, criteria))
            .map(|(i, _)| i)
            .collect();
        debug!(
            "Filter {:?} matched {}/{} transactions",
            self.criteria.fingerprint(),
            self.filtered.len(),
            self.collection.len()
        );
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn collection(&self) -> &TransactionCollection {
        &self.collection
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    pub fn hourly(&self) -> &[HourlyVolume] {
        &self.hourly
    }

    pub fn weekly(&self) -> &[WeeklyVolume] {
        &self.weekly
    }

    pub fn filtered(&self) -> Vec<&Transaction> {
        let all = self.collection.as_slice();
        self.filtered.iter().map(|&i| &all[i]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page.page_size)
    }

    /// First `n` transactions in collection order, for the overview panel
    pub fn recent(&self, n: usize) -> &[Transaction] {
        let all = self.collection.as_slice();
        &all[..n.min(all.len())]
    }

    pub fn method_distribution(&self) -> Vec<CategoryCount> {
        aggregate_service::distribution_by_method(&self.collection)
    }

    pub fn method_donut(&self) -> DonutChart {
        let segments: Vec<DonutSegment> = self
            .method_distribution()
            .into_iter()
            .map(|c| DonutSegment::new(c.label, c.count as f64))
            .collect();
        chart_service::donut(&segments, self.config.charts.donut)
    }

    pub fn status_shares(&self) -> Vec<StatusShare> {
        aggregate_service::status_shares(&self.stats)
    }

    pub fn top_merchants(&self) -> Vec<CategoryCount> {
        aggregate_service::top_merchants(&self.collection, self.config.top_merchants)
    }

    pub fn kpis(&self, live_rate: f64) -> Kpis {
        aggregate_service::kpis(&self.stats, live_rate, &self.hourly)
    }

    /// Build the full view-model from the current criteria and page
    pub fn snapshot(&self, live_rate: f64) -> DashboardSnapshot<'_> {
        let filtered = self.filtered();
        let view = paginate(&filtered, self.page.current_page, self.page.page_size);
        let page = SnapshotPage {
            items: view.items.to_vec(),
            page: view.page,
            total_pages: view.total_pages,
            total_items: view.total_items,
        };

        DashboardSnapshot {
            stats: self.stats,
            criteria: &self.criteria,
            filtered_count: self.filtered.len(),
            page,
            method_distribution: self.method_distribution(),
            status_shares: self.status_shares(),
            top_merchants: self.top_merchants(),
            method_donut: self.method_donut(),
            kpis: self.kpis(live_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::{collection, txn};

    fn dashboard(count: usize) -> Dashboard {
        let merchants = ["Amazon", "Swiggy", "Zomato", "Ola"];
        let txns = (0..count)
            .map(|i| {
                let status = if i % 3 == 0 { TransactionStatus::Failed } else { TransactionStatus::Success };
                let method = if i % 2 == 0 { PaymentMethod::Upi } else { PaymentMethod::Card };
                txn(&format!("TXN{:06}", 1000 + i), merchants[i % 4], 100.0, status, method)
            })
            .collect();
        Dashboard::new(DashboardConfig::default(), collection(txns), Vec::new(), Vec::new())
    }

    fn page_ids(d: &Dashboard) -> Vec<String> {
        let filtered = d.filtered();
        paginate(&filtered, d.page_state().current_page, d.page_state().page_size)
            .items
            .iter()
            .map(|t| t.id().to_string())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let d = dashboard(20);
        assert_eq!(d.filtered_count(), 20);
        assert_eq!(d.total_pages(), 3);
        assert_eq!(d.page_state().current_page, 1);
        assert_eq!(d.stats().total, 20);
        assert_eq!(page_ids(&d).len(), 8);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut d = dashboard(20);
        assert!(d.apply(DashboardEvent::GoToPage(3)));
        assert_eq!(d.page_state().current_page, 3);

        assert!(d.apply(DashboardEvent::Search("amaz".to_string())));
        assert_eq!(d.page_state().current_page, 1);
        assert_eq!(d.filtered_count(), 5);
        assert!(d.filtered().iter().all(|t| t.merchant() == "Amazon"));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut d = dashboard(20);
        assert!(!d.apply(DashboardEvent::PreviousPage));
        assert!(d.apply(DashboardEvent::GoToPage(99)));
        assert_eq!(d.page_state().current_page, 3);
        assert!(!d.apply(DashboardEvent::NextPage));
        assert_eq!(page_ids(&d), vec!["TXN001016", "TXN001017", "TXN001018", "TXN001019"]);
    }

    #[test]
    fn test_status_and_method_filters() {
        let mut d = dashboard(12);
        d.apply(DashboardEvent::StatusFilter("FAILED".to_string()));
        assert_eq!(d.filtered_count(), 4);
        d.apply(DashboardEvent::MethodFilter("UPI".to_string()));
        // failed: 0,3,6,9 -> upi: 0,6
        let ids: Vec<&str> = d.filtered().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["TXN001000", "TXN001006"]);

        d.apply(DashboardEvent::MethodFilter("Cheque".to_string()));
        assert_eq!(d.filtered_count(), 0);
        assert_eq!(d.total_pages(), 1);

        assert!(d.apply(DashboardEvent::ClearFilters));
        assert_eq!(d.filtered_count(), 12);
        assert!(!d.apply(DashboardEvent::ClearFilters));
    }

    #[test]
    fn test_replace_collection_clamps_page() {
        let mut d = dashboard(20);
        d.apply(DashboardEvent::GoToPage(3));
        d.replace_collection(collection(vec![txn(
            "TXN009999",
            "Ola",
            10.0,
            TransactionStatus::Success,
            PaymentMethod::Wallet,
        )]));
        assert_eq!(d.page_state().current_page, 1);
        assert_eq!(d.stats().total, 1);
        assert_eq!(d.filtered_count(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let d = dashboard(10);
        let snapshot = d.snapshot(98.2);
        assert_eq!(snapshot.filtered_count, 10);
        assert_eq!(snapshot.page.items.len(), 8);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["criteria"]["status"], "ALL");
        assert_eq!(json["page"]["total_pages"], 2);
        assert_eq!(json["method_donut"]["kind"], "segments");
    }

    #[test]
    fn test_snapshot_follows_criteria_and_page() {
        let mut d = dashboard(20);
        d.apply(DashboardEvent::StatusFilter("SUCCESS".to_string()));
        d.apply(DashboardEvent::NextPage);

        let snapshot = d.snapshot(98.2);
        assert_eq!(snapshot.filtered_count, 13);
        assert_eq!(snapshot.page.page, 2);
        assert_eq!(snapshot.page.total_pages, 2);
        assert_eq!(snapshot.page.total_items, 13);
        assert_eq!(snapshot.page.items.len(), 5);
        assert!(snapshot
            .page
            .items
            .iter()
            .all(|t| t.status() == TransactionStatus::Success));
    }

    #[test]
    fn test_recent_is_collection_prefix() {
        let d = dashboard(10);
        let ids: Vec<&str> = d.recent(3).iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["TXN001000", "TXN001001", "TXN001002"]);
        assert_eq!(d.recent(50).len(), 10);
    }

    #[test]
    fn test_empty_dashboard() {
        let d = Dashboard::new(
            DashboardConfig::default(),
            TransactionCollection::empty(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(d.total_pages(), 1);
        assert_eq!(d.stats().success_rate, 0.0);
        assert!(matches!(d.method_donut(), DonutChart::Neutral { .. }));
        assert!(d.recent(5).is_empty());
    }
}
