use anyhow::{Context, Result};

use crate::oracle::openai::DEFAULT_BASE_URL;

const DEFAULT_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Application configuration loaded from environment variables.
///
/// The API key itself is deliberately absent: it is read from the
/// environment on every request via [`Config::api_key`].
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_base_url: String,
    pub openai_organization: Option<String>,
    /// Name of the environment variable holding the API key.
    pub api_key_var: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_organization: lookup("OPENAI_ORGANIZATION").filter(|v| !v.is_empty()),
            api_key_var: lookup("API_KEY_VAR").unwrap_or_else(|| DEFAULT_API_KEY_VAR.to_string()),
        })
    }

    /// Reads the API key now. `None` when unset or empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use uuid::Uuid;

    /// Config whose key variable is unique to the caller, set to `key` if given.
    pub fn config_with_key(key: Option<&str>) -> Config {
        let api_key_var = format!("INSIGHT_TEST_KEY_{}", Uuid::new_v4().simple());
        if let Some(key) = key {
            std::env::set_var(&api_key_var, key);
        }
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_organization: None,
            api_key_var,
        }
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert!(config.openai_organization.is_none());
        assert_eq!(config.api_key_var, "OPENAI_API_KEY");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_ORGANIZATION", "org-123"),
            ("API_KEY_VAR", "GATEWAY_KEY"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.openai_base_url, "http://localhost:11434/v1");
        assert_eq!(config.openai_organization.as_deref(), Some("org-123"));
        assert_eq!(config.api_key_var, "GATEWAY_KEY");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
    }

    #[test]
    fn test_api_key_read_at_call_time() {
        let config = config_with_key(None);
        assert!(config.api_key().is_none());
        std::env::set_var(&config.api_key_var, "sk-late");
        assert_eq!(config.api_key().as_deref(), Some("sk-late"));
        std::env::set_var(&config.api_key_var, "");
        assert!(config.api_key().is_none());
    }
}
