// Configuration module
// All values are fixed at compile time; the server takes no flags, no
// config file, and no environment variables.

use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::ServerError;

/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub root: RootConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Served directory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RootConfig {
    pub dir: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Materialize the built-in defaults: all interfaces on port 8000,
    /// serving the process working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("root.dir", ".")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::Addr { addr, source })
    }
}
