//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "STOP_SERVER_ADDR";

/// Environment variable holding the snapshot path.
pub const SNAPSHOT_VAR: &str = "STOP_SERVER_SNAPSHOT";

/// Error returned when a configuration value is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value:?}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Configuration for the stop server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Path to the JSON stop snapshot loaded at startup.
    pub snapshot_path: PathBuf,
}

impl ServerConfig {
    /// Create a configuration with the given address and snapshot path.
    pub fn new(addr: SocketAddr, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            addr,
            snapshot_path: snapshot_path.into(),
        }
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the snapshot path.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            let addr = value.parse().map_err(|_| ConfigError {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
            config = config.with_addr(addr);
        }

        if let Some(value) = lookup(SNAPSHOT_VAR) {
            if value.is_empty() {
                return Err(ConfigError {
                    var: SNAPSHOT_VAR,
                    value,
                });
            }
            config = config.with_snapshot_path(value);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 3000)), "stops.json")
    }
}
