//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long the assistant "thinks" before a canned reply lands.
    pub reply_delay: Duration,
    /// Whether to serve the HTTP/WebSocket surface.
    pub http_enabled: bool,
    /// Port for the HTTP/WebSocket surface.
    pub http_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            http_enabled: true,
            http_port: 8080,
        }
    }
}

impl AppConfig {
    /// Build config from `LEARNQUEST_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let reply_delay = match lookup("LEARNQUEST_REPLY_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_value("LEARNQUEST_REPLY_DELAY_MS", &raw)?),
            None => defaults.reply_delay,
        };

        let http_enabled = match lookup("LEARNQUEST_HTTP_ENABLED") {
            Some(raw) => parse_bool("LEARNQUEST_HTTP_ENABLED", &raw)?,
            None => defaults.http_enabled,
        };

        let http_port = match lookup("LEARNQUEST_HTTP_PORT") {
            Some(raw) => parse_value("LEARNQUEST_HTTP_PORT", &raw)?,
            None => defaults.http_port,
        };

        Ok(Self {
            reply_delay,
            http_enabled,
            http_port,
        })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?} is not a boolean"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.reply_delay, Duration::from_millis(1000));
        assert!(config.http_enabled);
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LEARNQUEST_REPLY_DELAY_MS", "250"),
            ("LEARNQUEST_HTTP_ENABLED", "off"),
            ("LEARNQUEST_HTTP_PORT", " 9090 "),
        ]))
        .unwrap();
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert!(!config.http_enabled);
        assert_eq!(config.http_port, 9090);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("LEARNQUEST_HTTP_PORT", "99999")]))
            .unwrap_err();
        assert!(err.to_string().contains("LEARNQUEST_HTTP_PORT"));
    }

    #[test]
    fn invalid_bool_is_rejected() {
        assert!(
            AppConfig::from_lookup(lookup_from(&[("LEARNQUEST_HTTP_ENABLED", "maybe")])).is_err()
        );
    }
}
