//! # Configuration
//!
//! Settings come from the process environment (after an optional `.env` file has been
//! loaded into it). Parsing goes through a lookup function so tests can feed variables
//! without touching the real environment.

use axum::http::HeaderValue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("CORS_ORIGIN is not a valid header value: {0:?}")]
    InvalidCorsOrigin(String),
}

/// Runtime settings of the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// SQLite database holding the orders table.
    pub db_path: PathBuf,
    /// Registry snapshot file. `None` keeps issued keys in memory only.
    pub keys_file: Option<PathBuf>,
    pub cors_origin: HeaderValue,
    /// Enables the admin listing route when set.
    pub admin_key: Option<String>,
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            db_path: PathBuf::from("data.db"),
            keys_file: Some(PathBuf::from("keys.json")),
            cors_origin: HeaderValue::from_static("*"),
            admin_key: None,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`; unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(path) = lookup("DB_PATH").filter(|p| !p.is_empty()) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("KEYS_FILE") {
            config.keys_file = (!path.is_empty()).then(|| PathBuf::from(path));
        }
        if let Some(origin) = lookup("CORS_ORIGIN").filter(|o| !o.is_empty()) {
            config.cors_origin = HeaderValue::from_str(&origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;
        }
        config.admin_key = lookup("ADMIN_KEY").filter(|k| !k.is_empty());
        if let Some(dir) = lookup("PUBLIC_DIR").filter(|d| !d.is_empty()) {
            config.public_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Whether the configured origin is the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origin == "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.keys_file, Some(PathBuf::from("keys.json")));
        assert!(config.allows_any_origin());
        assert_eq!(config.admin_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            ("PORT", "8080"),
            ("DB_PATH", "/tmp/orders.db"),
            ("KEYS_FILE", "/tmp/keys.json"),
            ("CORS_ORIGIN", "https://example.com"),
            ("ADMIN_KEY", "s3cret"),
            ("PUBLIC_DIR", "static"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("/tmp/orders.db"));
        assert_eq!(config.keys_file, Some(PathBuf::from("/tmp/keys.json")));
        assert_eq!(config.cors_origin, "https://example.com");
        assert!(!config.allows_any_origin());
        assert_eq!(config.admin_key.as_deref(), Some("s3cret"));
        assert_eq!(config.public_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_empty_keys_file_disables_snapshot() {
        assert_eq!(parse(&[("KEYS_FILE", "")]).unwrap().keys_file, None);
    }

    #[test]
    fn test_empty_admin_key_leaves_route_disabled() {
        assert_eq!(parse(&[("ADMIN_KEY", "")]).unwrap().admin_key, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            parse(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
        assert_eq!(
            parse(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort("70000".into()))
        );
        assert_eq!(
            parse(&[("CORS_ORIGIN", "bad\norigin")]),
            Err(ConfigError::InvalidCorsOrigin("bad\norigin".into()))
        );
    }
}
