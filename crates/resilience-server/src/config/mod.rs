// SPDX-License-Identifier: Apache-2.0

use crate::error::ServerError;
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

pub const ENV_HOST: &str = "RESILIENCE_HOST";
pub const ENV_PORT: &str = "RESILIENCE_PORT";
pub const ENV_CORS_ORIGINS: &str = "RESILIENCE_CORS_ORIGINS";
pub const ENV_LOG_JSON: &str = "RESILIENCE_LOG_JSON";
pub const ENV_SHUTDOWN_DRAIN_MS: &str = "RESILIENCE_SHUTDOWN_DRAIN_MS";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub log_json: bool,
    pub shutdown_drain: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            log_json: true,
            shutdown_drain: Duration::ZERO,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or
    /// unparsable values keep their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup(ENV_HOST)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);
        let port = lookup(ENV_PORT)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let cors_allowed_origins = lookup(ENV_CORS_ORIGINS)
            .map(|v| parse_origins(&v))
            .unwrap_or(defaults.cors_allowed_origins);
        let log_json = lookup(ENV_LOG_JSON)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.log_json);
        let shutdown_drain = lookup(ENV_SHUTDOWN_DRAIN_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.shutdown_drain);
        Self {
            host,
            port,
            cors_allowed_origins,
            log_json,
            shutdown_drain,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("invalid host {}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Effective configuration tagged with its schema version, as logged at startup.
    pub fn startup_summary(&self) -> Result<serde_json::Value, ServerError> {
        let mut summary = serde_json::to_value(self)
            .map_err(|e| ServerError::Config(format!("config serialization failed: {e}")))?;
        if let serde_json::Value::Object(fields) = &mut summary {
            fields.insert(
                "config_schema_version".to_string(),
                serde_json::Value::from(CONFIG_SCHEMA_VERSION),
            );
        }
        Ok(summary)
    }

    #[must_use]
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.cors_allowed_origins.iter().any(|x| x == origin)
    }
}
