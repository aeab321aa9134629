//! HyperPay dashboard core
//!
//! Pure derivations over a payment-transaction collection (filtering,
//! pagination, aggregate statistics, chart geometry) plus the scoped
//! live success-rate simulator. Rendering is left to the consumer; the
//! `hyperpay-dashboard` binary is a terminal front-end over this crate.

pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::DashboardConfig;
pub use utils::errors::DashboardError;
