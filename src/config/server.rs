//! Server configuration from environment variables.
//!
//! Environment variables must be set by the runtime environment
//! (docker-compose env_file, or sourced manually for local dev).

use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `FAIRWAY_HOST` / `FAIRWAY_PORT`, falling back to the defaults.
    /// A present but unparsable port is a configuration error, not a
    /// silent fallback.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("FAIRWAY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("FAIRWAY_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "FAIRWAY_PORT must be a valid port number, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
