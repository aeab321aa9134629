use crate::models::Transaction;
use crate::services::{Dashboard, DashboardEvent};
use crate::utils::format;
use crate::utils::page::paginate;
use crate::utils::{Align, Table};

/// Table of transactions with the shared column layout
pub fn transaction_table<'a, I>(transactions: I) -> Table
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut table = Table::new(&["Merchant", "ID", "Amount", "Status", "Method", "Time"]).align(2, Align::Right);
    for txn in transactions {
        table.add_row(vec![
            txn.merchant().to_string(),
            txn.id().to_string(),
            format::rupees(txn.amount()),
            txn.status().to_string(),
            txn.method().to_string(),
            txn.date_label(),
        ]);
    }
    table
}

/// Apply a filter or page event, then show the resulting page
pub fn apply(dashboard: &mut Dashboard, event: DashboardEvent) -> String {
    dashboard.apply(event);
    render(dashboard)
}

/// Current page of the filtered table
pub fn render(dashboard: &Dashboard) -> String {
    let filtered = dashboard.filtered();
    let state = dashboard.page_state();
    let view = paginate(&filtered, state.current_page, state.page_size);
    let criteria = dashboard.criteria();

    let mut out = String::new();
    out.push_str(&format!(
        "📋 Transactions  [search: '{}'  status: {}  method: {}]\n",
        criteria.search, criteria.status, criteria.method
    ));
    out.push_str(&format!(
        "{} transactions found{}Page {}/{}\n\n",
        view.total_items,
        " ".repeat(4),
        view.page,
        view.total_pages
    ));

    if view.is_empty() {
        out.push_str("No transactions match your filters");
        return out;
    }

    out.push_str(&transaction_table(view.items.iter().copied()).render());
    if view.total_pages > 1 {
        let pages: Vec<String> = (1..=view.total_pages)
            .map(|p| if p == view.page { format!("[{}]", p) } else { p.to_string() })
            .collect();
        out.push_str(&format!("\n\n{}", pages.join(" ")));
    }
    out
}
