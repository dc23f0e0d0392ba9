//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),

    #[error("invalid HOST {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when either variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a value is present but malformed.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.map_or(DEFAULT_HOST, str::trim);
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.to_owned()))?;
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
