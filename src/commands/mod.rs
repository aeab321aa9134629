//! Line commands for the terminal front-end
//!
//! Each input line maps to one dashboard event or view. Views only read
//! derived data from [`Dashboard`]; they never compute statistics themselves.

pub mod analytics;
pub mod help;
pub mod overview;
pub mod transaction;

use tracing::debug;

use crate::services::{Dashboard, DashboardEvent, LiveRate, PulsePhase};
use crate::utils::errors::DashboardError;

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Parse and run one input line
pub fn handle_line(dashboard: &mut Dashboard, live: &LiveRate, line: &str) -> Result<Outcome, DashboardError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Ok(Outcome::Output(String::new()));
    };
    debug!("Running command '{}' with {} arg(s)", command, args.len());

    let output = match command.to_lowercase().as_str() {
        "help" | "?" => help::execute(),
        "overview" => overview::execute(dashboard, live),
        "transactions" | "tx" => transaction::render(dashboard),
        "analytics" => analytics::execute(dashboard, live),
        "live" => render_live(live),
        "snapshot" => serde_json::to_string_pretty(&dashboard.snapshot(live.rate))?,
        "search" => {
            // Everything after the command word, so multi-word merchants work
            let text = line.trim_start()[command.len()..].trim();
            transaction::apply(dashboard, DashboardEvent::Search(text.to_string()))
        }
        "status" => {
            let value = single_arg("status", args, "status <SUCCESS|FAILED|PENDING|REFUNDED|ALL>")?;
            transaction::apply(dashboard, DashboardEvent::StatusFilter(value.to_string()))
        }
        "method" => {
            let value = single_arg("method", args, "method <UPI|Card|NetBanking|Wallet|BNPL|ALL>")?;
            transaction::apply(dashboard, DashboardEvent::MethodFilter(value.to_string()))
        }
        "clear" => transaction::apply(dashboard, DashboardEvent::ClearFilters),
        "page" => {
            let value = single_arg("page", args, "page <number>")?;
            let page = value
                .trim_start_matches(['p', 'P'])
                .parse::<usize>()
                .map_err(|_| invalid("page", "page <number>"))?;
            transaction::apply(dashboard, DashboardEvent::GoToPage(page))
        }
        "next" => transaction::apply(dashboard, DashboardEvent::NextPage),
        "prev" | "previous" => transaction::apply(dashboard, DashboardEvent::PreviousPage),
        "quit" | "exit" => return Ok(Outcome::Quit),
        _ => return Err(DashboardError::UnknownCommand(command.to_string())),
    };

    Ok(Outcome::Output(output))
}

fn invalid(command: &str, usage: &str) -> DashboardError {
    DashboardError::InvalidArguments {
        command: command.to_string(),
        usage: usage.to_string(),
    }
}

fn single_arg<'a>(command: &str, args: &[&'a str], usage: &str) -> Result<&'a str, DashboardError> {
    match args {
        [value] => Ok(value),
        _ => Err(invalid(command, usage)),
    }
}

/// Live success-rate badge, e.g. "● 98.2% SR LIVE"
pub fn render_live(live: &LiveRate) -> String {
    let marker = match live.phase {
        PulsePhase::Pulsing => "◉",
        PulsePhase::Idle => "●",
    };
    format!("{} {}% SR LIVE", marker, live.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::transaction::fixtures::{collection, txn};
    use crate::models::{PaymentMethod, TransactionStatus};

    fn dashboard() -> Dashboard {
        let txns = vec![
            txn("TXN001000", "Amazon", 120.0, TransactionStatus::Success, PaymentMethod::Upi),
            txn("TXN001001", "Big Basket", 80.0, TransactionStatus::Failed, PaymentMethod::Card),
            txn("TXN001002", "Zomato", 45.5, TransactionStatus::Success, PaymentMethod::Card),
        ];
        Dashboard::new(DashboardConfig::default(), collection(txns), Vec::new(), Vec::new())
    }

    fn output(outcome: Outcome) -> String {
        match outcome {
            Outcome::Output(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_search_keeps_spaces() {
        let mut d = dashboard();
        let live = LiveRate::new(98.2);
        let text = output(handle_line(&mut d, &live, "search big bas").unwrap());
        assert_eq!(d.criteria().search, "big bas");
        assert!(text.contains("Big Basket"));
        assert!(text.contains("1 transactions found"));
    }

    #[test]
    fn test_status_filter_and_unknown_label() {
        let mut d = dashboard();
        let live = LiveRate::new(98.2);
        handle_line(&mut d, &live, "status success").unwrap();
        assert_eq!(d.filtered_count(), 2);
        let text = output(handle_line(&mut d, &live, "method Cheque").unwrap());
        assert!(text.contains("No transactions match your filters"));
    }

    #[test]
    fn test_page_argument_forms() {
        let mut d = dashboard();
        let live = LiveRate::new(98.2);
        assert!(handle_line(&mut d, &live, "page p1").is_ok());
        assert!(matches!(
            handle_line(&mut d, &live, "page two"),
            Err(DashboardError::InvalidArguments { .. })
        ));
        assert!(matches!(
            handle_line(&mut d, &live, "status"),
            Err(DashboardError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_unknown_command_and_quit() {
        let mut d = dashboard();
        let live = LiveRate::new(98.2);
        assert!(matches!(
            handle_line(&mut d, &live, "refund TXN001000"),
            Err(DashboardError::UnknownCommand(c)) if c == "refund"
        ));
        assert_eq!(handle_line(&mut d, &live, "quit").unwrap(), Outcome::Quit);
        assert_eq!(handle_line(&mut d, &live, "   ").unwrap(), Outcome::Output(String::new()));
    }

    #[test]
    fn test_snapshot_is_json() {
        let mut d = dashboard();
        let live = LiveRate::new(97.5);
        let text = output(handle_line(&mut d, &live, "snapshot").unwrap());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["stats"]["total"], 3);
        assert_eq!(json["kpis"]["authorization_rate"], 97.5);
    }

    #[test]
    fn test_render_live() {
        let mut live = LiveRate::new(98.2);
        assert_eq!(render_live(&live), "● 98.2% SR LIVE");
        live.phase = PulsePhase::Pulsing;
        assert!(render_live(&live).starts_with('◉'));
    }
}
