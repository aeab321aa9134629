use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use hyperpay_dashboard::commands::{self, Outcome};
use hyperpay_dashboard::services::source_service::{mock_hourly_series, weekly_series};
use hyperpay_dashboard::services::{
    Dashboard, JsonFileSource, LiveRateSimulator, MockTransactionSource, TransactionSource,
};
use hyperpay_dashboard::utils::extract_clean_error;
use hyperpay_dashboard::DashboardConfig;

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Read lines on a plain thread so a pending read never holds up shutdown
fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<std::io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout carries command output
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "hyperpay_dashboard=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("⚡ Starting HyperPay Analytics dashboard...");

    let config = match DashboardConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    debug!("Using seed {}", seed);

    let source: Box<dyn TransactionSource> = match &config.data_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockTransactionSource::new(config.transaction_count, seed)),
    };
    let collection = match source.load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load transactions: {}", e);
            return;
        }
    };
    if collection.is_empty() {
        warn!("Transaction source returned no transactions");
    }

    let hourly = mock_hourly_series(&mut StdRng::seed_from_u64(seed.wrapping_add(1)));
    let live_config = config.live_rate;
    let mut dashboard = Dashboard::new(config, collection, hourly, weekly_series());

    // Owned by this view; stopped before main returns
    let simulator = LiveRateSimulator::start(live_config, StdRng::seed_from_u64(seed.wrapping_add(2)));

    info!("Dashboard ready. Type `help` for commands");
    let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));

    loop {
        prompt();
        let line = tokio::select! {
            line = lines.recv() => match line {
                Some(Ok(line)) => line,
                None => break,
                Some(Err(e)) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let live = simulator.current();
        match commands::handle_line(&mut dashboard, &live, &line) {
            Ok(Outcome::Output(text)) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                debug!("Command '{}' failed: {:?}", line.trim(), e);
                println!("❌ {}", extract_clean_error(&e.to_string()));
            }
        }
    }

    simulator.stop().await;
    info!("Goodbye");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_line_reader_forwards_lines_then_closes() {
        let mut lines = spawn_line_reader(Cursor::new("overview\nsearch amaz\n"));
        assert_eq!(lines.recv().await.unwrap().unwrap(), "overview");
        assert_eq!(lines.recv().await.unwrap().unwrap(), "search amaz");
        assert!(lines.recv().await.is_none());
    }
}
