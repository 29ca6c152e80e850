//! Runtime configuration with environment overrides.

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_global.csv";
pub const DEFAULT_TOP_N: usize = 5;

pub const DATA_URL_VAR: &str = "COVID_DASHBOARD_DATA_URL";
pub const TOP_N_VAR: &str = "COVID_DASHBOARD_TOP_N";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("COVID_DASHBOARD_TOP_N must be a positive integer, got '{0}'")]
    InvalidTopN(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_url: String,
    /// Number of ranked regions offered in the selector.
    pub top_n: usize,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            top_n: DEFAULT_TOP_N,
            window_size: [1400.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Defaults, overridden by `.env` and process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(DATA_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.data_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TOP_N_VAR) {
            config.top_n = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidTopN(raw)),
            };
        }

        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn overrides_apply() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (DATA_URL_VAR, " http://localhost/data.csv "),
            (TOP_N_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(config.data_url, "http://localhost/data.csv");
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn rejects_bad_top_n() {
        let err = DashboardConfig::from_lookup(lookup(&[(TOP_N_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTopN("0".to_string()));
        assert!(DashboardConfig::from_lookup(lookup(&[(TOP_N_VAR, "five")])).is_err());
    }
}
