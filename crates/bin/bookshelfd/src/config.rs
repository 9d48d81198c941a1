//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `bookshelf.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Seed document settings.
    pub seed: SeedConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Where the initial book collection comes from.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Path to a seed document. The bundled document is used when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `bookshelf.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override cannot be parsed, or if the resulting configuration is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bookshelf.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by variable name. `RUST_LOG` wins over
    /// `BOOKSHELF_LOG`, and `BOOKSHELF_BIND` wins over `BOOKSHELF_HOST` and
    /// `BOOKSHELF_PORT`.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("BOOKSHELF_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BOOKSHELF_PORT") {
            self.server.port = parse_port("BOOKSHELF_PORT", &port)?;
        }
        if let Some(bind) = lookup("BOOKSHELF_BIND") {
            let Some((host, port)) = bind.rsplit_once(':') else {
                return Err(ConfigError::Validation(format!(
                    "BOOKSHELF_BIND must be host:port, got {bind:?}"
                )));
            };
            self.server.port = parse_port("BOOKSHELF_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(path) = lookup("BOOKSHELF_SEED") {
            self.seed.path = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("BOOKSHELF_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(var: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::Validation(format!("{var} must be a port number, got {value:?}"))
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bookshelfd=info,bookshelf_app=info,bookshelf_adapter_storage_memory=info,bookshelf_adapter_http_axum=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
