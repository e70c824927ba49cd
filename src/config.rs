use std::time::Duration;

use serde::Deserialize;

use crate::models::API_BASE;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the video search API proxy
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout for upstream calls, in seconds. Unset means none.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base() -> String {
    API_BASE.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.api_base, API_BASE);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("API_BASE".to_string(), "http://localhost:8787/api/v2".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_base, "http://localhost:8787/api/v2");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }
}
