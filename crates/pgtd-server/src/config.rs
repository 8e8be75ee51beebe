use std::net::{IpAddr, SocketAddr};

use pgtd_ingest::ReaderOptions;
use pgtd_validate::ValidationOptions;

/// Default upload limit: 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Largest accepted request body (default: 16 MiB).
    pub max_upload_bytes: usize,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `127.0.0.1`  |
    /// | `PORT`                 | `5000`       |
    /// | `MAX_UPLOAD_BYTES`     | `16777216`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validator options whose workbook size cap matches the upload limit.
    pub fn validation_options(&self) -> ValidationOptions {
        let max_file_size = u64::try_from(self.max_upload_bytes).unwrap_or(u64::MAX);
        ValidationOptions::new().with_reader(ReaderOptions::default().with_max_file_size(max_file_size))
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.max_upload_bytes, 16_777_216);
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn validation_options_cap_workbook_size() {
        let config = ServerConfig::from_lookup(lookup(&[("MAX_UPLOAD_BYTES", "2048")])).unwrap();
        let options = config.validation_options();
        assert_eq!(options.reader.max_file_size, 2048);
        assert_eq!(options.reader.header_scan_rows, ReaderOptions::default().header_scan_rows);
        assert!(options.reference_date.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string(),
            }
        );
    }
}
