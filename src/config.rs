// Runtime configuration. Every value has a default that points at the
// public services, so the demo runs with no setup; environment variables
// exist to aim it at a local mock or a slower network.

use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::io::IsTerminal;
use std::time::Duration;

pub const DEFAULT_JSONPLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_COINPAPRIKA_URL: &str = "https://api.coinpaprika.com/v1";
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URLs of the services the demo routines talk to. No trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub jsonplaceholder: String,
    pub coinpaprika: String,
    pub geocoding: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            jsonplaceholder: DEFAULT_JSONPLACEHOLDER_URL.into(),
            coinpaprika: DEFAULT_COINPAPRIKA_URL.into(),
            geocoding: DEFAULT_GEOCODING_URL.into(),
            forecast: DEFAULT_FORECAST_URL.into(),
        }
    }
}

impl Endpoints {
    /// Point every service at the same base URL. Handy for tests that run a
    /// single mock server.
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Endpoints {
            jsonplaceholder: base.clone(),
            coinpaprika: base.clone(),
            geocoding: base.clone(),
            forecast: base,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoints: Endpoints,
    /// Upper bound for a single request, connect through body.
    pub timeout: Duration,
    /// Show a spinner on stderr while a request is in flight.
    pub show_progress: bool,
}

impl Config {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::from_lookup(|key| std::env::var(key).ok())?;
        if std::env::var_os("API_DEMO_PROGRESS").is_none() {
            config.show_progress = std::io::stderr().is_terminal();
        }
        Ok(config)
    }

    /// Build a configuration from an arbitrary key lookup. Unset keys fall
    /// back to the defaults; the spinner defaults to off.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = |key: &str, default: &str| -> Result<String> {
            let value = lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string());
            let parsed = Url::parse(&value)
                .with_context(|| format!("{key} is not a valid URL: {value:?}"))?;
            if parsed.cannot_be_a_base() {
                bail!("{key} must be an http(s) base URL, got {value:?}");
            }
            Ok(value)
        };

        let endpoints = Endpoints {
            jsonplaceholder: url("API_DEMO_JSONPLACEHOLDER_URL", DEFAULT_JSONPLACEHOLDER_URL)?,
            coinpaprika: url("API_DEMO_COINPAPRIKA_URL", DEFAULT_COINPAPRIKA_URL)?,
            geocoding: url("API_DEMO_GEOCODING_URL", DEFAULT_GEOCODING_URL)?,
            forecast: url("API_DEMO_FORECAST_URL", DEFAULT_FORECAST_URL)?,
        };

        let timeout = match lookup("API_DEMO_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("API_DEMO_TIMEOUT_SECS must be a whole number, got {raw:?}")
                })?;
                if secs == 0 {
                    bail!("API_DEMO_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let show_progress = match lookup("API_DEMO_PROGRESS") {
            Some(v) => {
                let v = v.trim().to_ascii_lowercase();
                !matches!(v.as_str(), "0" | "false" | "no" | "off")
            }
            None => false,
        };

        Ok(Config {
            endpoints,
            timeout,
            show_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_public_services() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.show_progress);
    }

    #[test]
    fn overrides_strip_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_DEMO_JSONPLACEHOLDER_URL", "http://127.0.0.1:9000/"),
            ("API_DEMO_TIMEOUT_SECS", "3"),
            ("API_DEMO_PROGRESS", "1"),
        ]))
        .unwrap();
        assert_eq!(config.endpoints.jsonplaceholder, "http://127.0.0.1:9000");
        assert_eq!(config.endpoints.coinpaprika, DEFAULT_COINPAPRIKA_URL);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.show_progress);
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        assert!(Config::from_lookup(lookup_from(&[("API_DEMO_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("API_DEMO_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = Config::from_lookup(lookup_from(&[(
            "API_DEMO_JSONPLACEHOLDER_URL",
            "localhost:3000",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("API_DEMO_JSONPLACEHOLDER_URL"), "{err}");

        for (key, value) in [
            ("API_DEMO_FORECAST_URL", "not a url"),
            ("API_DEMO_GEOCODING_URL", "mailto:a@b.c"),
        ] {
            assert!(
                Config::from_lookup(lookup_from(&[(key, value)])).is_err(),
                "{key}={value} accepted"
            );
        }
    }

    #[test]
    fn progress_can_be_switched_off() {
        let config = Config::from_lookup(lookup_from(&[("API_DEMO_PROGRESS", "false")])).unwrap();
        assert!(!config.show_progress);
    }

    #[test]
    fn all_at_shares_one_base() {
        let endpoints = Endpoints::all_at("http://localhost:1234/");
        assert_eq!(endpoints.geocoding, "http://localhost:1234");
        assert_eq!(endpoints.forecast, "http://localhost:1234");
    }
}
