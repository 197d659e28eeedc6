//! Server configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default BIN data file
pub const DEFAULT_DATA_PATH: &str = "bins_su.json";

/// Configuration error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development, human readable logs
    #[default]
    Development,
    /// Production, JSON logs
    Production,
}

impl Environment {
    /// Whether this is production
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Ok(Environment::Development)
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening host
    pub host: IpAddr,
    /// Listening port
    pub port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// BIN data file loaded at startup
    pub data_path: PathBuf,
    /// Serve `/metrics`
    pub metrics_enabled: bool,
    /// Export traces over OTLP
    pub otel_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            metrics_enabled: false,
            otel_enabled: false,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    ///
    /// | Variable          | Default         |
    /// |-------------------|-----------------|
    /// | `HOST`            | `0.0.0.0`       |
    /// | `PORT`            | `3000`          |
    /// | `APP_ENV`         | `development`   |
    /// | `BIN_DATA_PATH`   | `bins_su.json`  |
    /// | `METRICS_ENABLED` | `false`         |
    /// | `OTEL_ENABLED`    | `false`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `get`, which maps a variable name to its value
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = match get("HOST") {
            Some(raw) => parse_value("HOST", raw)?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(raw) => parse_value("PORT", raw)?,
            None => defaults.port,
        };
        let environment = get("APP_ENV")
            .map(|raw| raw.parse().unwrap_or_default())
            .unwrap_or(defaults.environment);
        let data_path = get("BIN_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);
        let metrics_enabled = match get("METRICS_ENABLED") {
            Some(raw) => parse_value("METRICS_ENABLED", raw)?,
            None => defaults.metrics_enabled,
        };
        let otel_enabled = match get("OTEL_ENABLED") {
            Some(raw) => parse_value("OTEL_ENABLED", raw)?,
            None => defaults.otel_enabled,
        };

        Ok(ServerConfig {
            host,
            port,
            environment,
            data_path,
            metrics_enabled,
            otel_enabled,
        })
    }

    /// Address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_value<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert!(!config.environment.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("APP_ENV", "Production"),
            ("BIN_DATA_PATH", "/srv/bins.json"),
            ("METRICS_ENABLED", "true"),
            ("OTEL_ENABLED", "false"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8081");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.data_path, PathBuf::from("/srv/bins.json"));
        assert!(config.metrics_enabled);
        assert!(!config.otel_enabled);
    }

    #[test]
    fn test_unknown_environment_is_development() {
        let config = config_from(&[("APP_ENV", "staging")]).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_invalid_flag() {
        let err = config_from(&[("METRICS_ENABLED", "yes")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "METRICS_ENABLED",
                ..
            }
        ));
    }
}
