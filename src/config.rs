//! Runtime configuration, read from `HYPERPAY_*` environment variables
//!
//! `main` loads `.env` through dotenv before calling [`DashboardConfig::from_env`].
//! Unset variables fall back to the defaults below; set but unparsable values
//! are rejected.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::models::DonutGeometry;
use crate::utils::errors::DashboardError;

/// Random-walk settings for the live success-rate badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveRateConfig {
    pub initial_rate: f64,
    /// Largest change applied in one tick, in percentage points
    pub max_step: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub interval: Duration,
    pub pulse: Duration,
}

impl Default for LiveRateConfig {
    fn default() -> Self {
        LiveRateConfig {
            initial_rate: 98.2,
            max_step: 0.15,
            floor: 0.0,
            ceiling: 100.0,
            interval: Duration::from_millis(2000),
            pulse: Duration::from_millis(500),
        }
    }
}

/// Pixel dimensions handed to the geometry generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub sparkline_width: f64,
    pub sparkline_height: f64,
    pub bar_max_height: f64,
    pub hourly_bar_max_height: f64,
    /// Height given to zero-value bars so they remain visible
    pub bar_min_height: f64,
    pub donut: DonutGeometry,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            sparkline_width: 80.0,
            sparkline_height: 30.0,
            bar_max_height: 70.0,
            hourly_bar_max_height: 90.0,
            bar_min_height: 2.0,
            donut: DonutGeometry::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub page_size: usize,
    /// Number of mock transactions generated when no data file is given
    pub transaction_count: usize,
    pub top_merchants: usize,
    pub seed: Option<u64>,
    pub data_file: Option<PathBuf>,
    pub live_rate: LiveRateConfig,
    pub charts: ChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            page_size: 8,
            transaction_count: 40,
            top_merchants: 5,
            seed: None,
            data_file: None,
            live_rate: LiveRateConfig::default(),
            charts: ChartConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DashboardConfig::default();
        let live = defaults.live_rate;
        let charts = defaults.charts;

        let config = DashboardConfig {
            page_size: parse_or(&lookup, "HYPERPAY_PAGE_SIZE", defaults.page_size)?,
            transaction_count: parse_or(&lookup, "HYPERPAY_TRANSACTION_COUNT", defaults.transaction_count)?,
            top_merchants: parse_or(&lookup, "HYPERPAY_TOP_MERCHANTS", defaults.top_merchants)?,
            seed: parse_opt(&lookup, "HYPERPAY_SEED")?,
            data_file: lookup("HYPERPAY_DATA_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            live_rate: LiveRateConfig {
                initial_rate: parse_or(&lookup, "HYPERPAY_LIVE_RATE_INITIAL", live.initial_rate)?,
                max_step: parse_or(&lookup, "HYPERPAY_LIVE_RATE_STEP", live.max_step)?,
                floor: parse_or(&lookup, "HYPERPAY_LIVE_RATE_FLOOR", live.floor)?,
                ceiling: parse_or(&lookup, "HYPERPAY_LIVE_RATE_CEILING", live.ceiling)?,
                interval: Duration::from_millis(parse_or(
                    &lookup,
                    "HYPERPAY_LIVE_INTERVAL_MS",
                    live.interval.as_millis() as u64,
                )?),
                pulse: Duration::from_millis(parse_or(
                    &lookup,
                    "HYPERPAY_LIVE_PULSE_MS",
                    live.pulse.as_millis() as u64,
                )?),
            },
            charts: ChartConfig {
                bar_min_height: parse_or(&lookup, "HYPERPAY_BAR_MIN_HEIGHT", charts.bar_min_height)?,
                ..charts
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.page_size == 0 {
            return Err(config_error("HYPERPAY_PAGE_SIZE", self.page_size));
        }
        let live = &self.live_rate;
        if !live.floor.is_finite() || !(live.floor <= live.ceiling) {
            return Err(config_error("HYPERPAY_LIVE_RATE_FLOOR", live.floor));
        }
        if !live.ceiling.is_finite() {
            return Err(config_error("HYPERPAY_LIVE_RATE_CEILING", live.ceiling));
        }
        if !live.initial_rate.is_finite() {
            return Err(config_error("HYPERPAY_LIVE_RATE_INITIAL", live.initial_rate));
        }
        if !(0.0..=live.ceiling - live.floor).contains(&live.max_step) {
            return Err(config_error("HYPERPAY_LIVE_RATE_STEP", live.max_step));
        }
        if live.interval.is_zero() {
            return Err(config_error("HYPERPAY_LIVE_INTERVAL_MS", 0));
        }
        if !self.charts.bar_min_height.is_finite() || self.charts.bar_min_height < 0.0 {
            return Err(config_error("HYPERPAY_BAR_MIN_HEIGHT", self.charts.bar_min_height));
        }
        Ok(())
    }
}

fn config_error(key: &str, value: impl ToString) -> DashboardError {
    DashboardError::Config {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_opt<T, F>(lookup: &F, key: &str) -> Result<Option<T>, DashboardError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| config_error(key, raw)),
        _ => Ok(None),
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, DashboardError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size, 8);
        assert_eq!(config.live_rate.interval, Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("HYPERPAY_PAGE_SIZE", "10"),
            ("HYPERPAY_SEED", "42"),
            ("HYPERPAY_LIVE_PULSE_MS", "250"),
            ("HYPERPAY_DATA_FILE", "data/txns.json"),
        ]))
        .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.live_rate.pulse, Duration::from_millis(250));
        assert_eq!(config.data_file, Some(PathBuf::from("data/txns.json")));
    }

    #[test]
    fn test_rejects_unparsable_value() {
        let err = DashboardConfig::from_lookup(lookup(&[("HYPERPAY_PAGE_SIZE", "eight")])).unwrap_err();
        assert!(matches!(err, DashboardError::Config { ref key, .. } if key == "HYPERPAY_PAGE_SIZE"));
    }

    #[test]
    fn test_rejects_zero_page_size_and_inverted_bounds() {
        assert!(DashboardConfig::from_lookup(lookup(&[("HYPERPAY_PAGE_SIZE", "0")])).is_err());
        assert!(DashboardConfig::from_lookup(lookup(&[
            ("HYPERPAY_LIVE_RATE_FLOOR", "90"),
            ("HYPERPAY_LIVE_RATE_CEILING", "10"),
        ]))
        .is_err());
    }

    #[test]
    fn test_rejects_step_wider_than_band() {
        for step in ["1e308", "inf", "NaN", "-0.5", "100.5"] {
            let err = DashboardConfig::from_lookup(lookup(&[("HYPERPAY_LIVE_RATE_STEP", step)])).unwrap_err();
            assert!(matches!(err, DashboardError::Config { ref key, .. } if key == "HYPERPAY_LIVE_RATE_STEP"));
        }
        let config = DashboardConfig::from_lookup(lookup(&[("HYPERPAY_LIVE_RATE_STEP", "100")])).unwrap();
        assert_eq!(config.live_rate.max_step, 100.0);
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        let err = DashboardConfig::from_lookup(lookup(&[("HYPERPAY_LIVE_RATE_INITIAL", "NaN")])).unwrap_err();
        assert!(matches!(err, DashboardError::Config { ref key, .. } if key == "HYPERPAY_LIVE_RATE_INITIAL"));
        assert!(DashboardConfig::from_lookup(lookup(&[("HYPERPAY_LIVE_RATE_CEILING", "inf")])).is_err());
        assert!(DashboardConfig::from_lookup(lookup(&[("HYPERPAY_LIVE_RATE_FLOOR", "-inf")])).is_err());
    }
}
