use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_SYSTEM_BRIEF: &str = "You are SENS•AI, a helpful career coach.";

/// Client configuration loaded from environment variables.
/// Built once at startup and handed to the backend and the orchestrator.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub system_brief: String,
    /// `None` leaves requests unbounded; a hung call keeps its slice busy.
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_url = lookup("BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let request_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .context("BACKEND_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            None => None,
        };

        Ok(Config {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
            system_brief: lookup("SYSTEM_BRIEF")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SYSTEM_BRIEF.to_string()),
            request_timeout,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.system_brief, DEFAULT_SYSTEM_BRIEF);
        assert!(config.request_timeout.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_backend_url_trailing_slash_trimmed() {
        let config = load(&[("BACKEND_URL", "https://coach.example.com/")]).unwrap();
        assert_eq!(config.backend_url, "https://coach.example.com");
    }

    #[test]
    fn test_timeout_parsed() {
        let config = load(&[("BACKEND_TIMEOUT_SECS", "30")]).unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(load(&[("BACKEND_TIMEOUT_SECS", "soon")]).is_err());
    }
}
