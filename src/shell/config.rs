// Runtime configuration.
//
// Purpose
// - Read the listener address and backend selection from the environment.
//
// Responsibilities
// - Apply defaults for unset variables.
// - Reject malformed values before anything is bound or connected.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4200;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("BACKEND_TIMEOUT_SECS must be at least 1")]
    ZeroTimeout,

    #[error("BACKEND_URL is not a valid URL: '{0}'")]
    InvalidUrl(String),

    #[error("BACKEND_MODE must be 'http' or 'memory', got '{0}'")]
    UnknownMode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMode {
    Http { base_url: Url, timeout: Duration },
    InMemory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: BackendMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = read("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read("APP_PORT") {
            Some(value) => parse_number("APP_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let mode = read("BACKEND_MODE").unwrap_or_else(|| "http".to_string());
        let backend = match mode.trim().to_ascii_lowercase().as_str() {
            "http" => {
                let raw = read("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
                let base_url =
                    Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl(raw.clone()))?;
                let secs = match read("BACKEND_TIMEOUT_SECS") {
                    Some(value) => parse_number("BACKEND_TIMEOUT_SECS", &value)?,
                    None => DEFAULT_BACKEND_TIMEOUT_SECS,
                };
                if secs == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
                BackendMode::Http {
                    base_url,
                    timeout: Duration::from_secs(secs),
                }
            }
            "memory" => BackendMode::InMemory,
            _ => return Err(ConfigError::UnknownMode(mode)),
        };

        Ok(Self {
            host,
            port,
            backend,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:4200");
        assert_eq!(
            config.backend,
            BackendMode::Http {
                base_url: Url::parse("http://localhost:8000").unwrap(),
                timeout: Duration::from_secs(10),
            }
        );
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("BACKEND_URL", "http://backend:8000/api/"),
            ("BACKEND_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        let BackendMode::Http { base_url, timeout } = config.backend else {
            panic!("expected the http backend");
        };
        assert_eq!(base_url.as_str(), "http://backend:8000/api/");
        assert_eq!(timeout, Duration::from_secs(3));
    }

    #[rstest]
    #[case("memory")]
    #[case("MEMORY")]
    fn it_should_select_the_in_memory_backend(#[case] mode: &str) {
        let config = AppConfig::from_lookup(lookup(&[("BACKEND_MODE", mode)])).unwrap();
        assert_eq!(config.backend, BackendMode::InMemory);
    }

    #[rstest]
    #[case(&[("APP_PORT", "http")], ConfigError::NotANumber { name: "APP_PORT", value: "http".into() })]
    #[case(&[("BACKEND_TIMEOUT_SECS", "-1")], ConfigError::NotANumber { name: "BACKEND_TIMEOUT_SECS", value: "-1".into() })]
    #[case(&[("BACKEND_TIMEOUT_SECS", "0")], ConfigError::ZeroTimeout)]
    #[case(&[("BACKEND_URL", "not a url")], ConfigError::InvalidUrl("not a url".into()))]
    #[case(&[("BACKEND_MODE", "grpc")], ConfigError::UnknownMode("grpc".into()))]
    fn it_should_reject_malformed_values(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        assert_eq!(AppConfig::from_lookup(lookup(pairs)), Err(expected));
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("APP_PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
