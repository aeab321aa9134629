use thiserror::Error;

/// Errors raised at the edges of the dashboard (data sources, config, commands).
///
/// Derivations themselves never fail: empty collections, zero totals and
/// out-of-range pages all resolve to defined fallback values.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid transaction {id}: {reason}")]
    InvalidTransaction { id: String, reason: String },
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(String),
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {key}: '{value}'")]
    Config { key: String, value: String },
    #[error("Unknown command: '{0}'. Type `help` for a list of commands")]
    UnknownCommand(String),
    #[error("Invalid arguments for `{command}`: {usage}")]
    InvalidArguments { command: String, usage: String },
}

/// Strip the variant prefix from a nested error message
///
/// Turns "Failed to parse data file: expected value at line 1 column 1"
/// into "expected value at line 1 column 1".
pub fn extract_clean_error(error_msg: &str) -> String {
    if error_msg.starts_with("Failed to ") {
        if let Some(first_colon) = error_msg.find(": ") {
            return error_msg[first_colon + 2..].trim().to_string();
        }
    }
    error_msg.to_string()
}
