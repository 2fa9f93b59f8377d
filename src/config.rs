use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_DEPTH_CHART_URL: &str =
    "https://api.sportsdata.io/v3/nfl/scores/json/DepthCharts";
pub const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub log_capacity: usize,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_DEPTH_CHART_URL.to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }

    /// Reads `.env.local` / `.env` and then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");

        let api_key = env::var("SPORTSDATA_API_KEY")
            .ok()
            .and_then(non_empty)
            .context("SPORTSDATA_API_KEY is not set")?;
        let endpoint = env::var("DEPTH_CHART_URL")
            .ok()
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_DEPTH_CHART_URL.to_string());
        let log_capacity = env::var("LOG_CAPACITY")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_LOG_CAPACITY)
            .clamp(10, 10_000);

        Ok(Self {
            api_key,
            endpoint,
            log_capacity,
        })
    }

    pub fn depth_chart_url(&self) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{sep}key={}", self.endpoint, self.api_key)
    }
}

fn non_empty(val: String) -> Option<String> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_key_as_query() {
        let cfg = Config::new("abc123");
        assert_eq!(
            cfg.depth_chart_url(),
            "https://api.sportsdata.io/v3/nfl/scores/json/DepthCharts?key=abc123"
        );
    }

    #[test]
    fn url_appends_to_existing_query() {
        let mut cfg = Config::new("k");
        cfg.endpoint = "http://localhost:8080/depth?season=2023".to_string();
        assert_eq!(
            cfg.depth_chart_url(),
            "http://localhost:8080/depth?season=2023&key=k"
        );
    }
}
