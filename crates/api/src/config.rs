//! Server settings, read once at startup from the process environment.
//!
//! | Variable               | Default                 |
//! |------------------------|-------------------------|
//! | `HOST`                 | `0.0.0.0`               |
//! | `PORT`                 | `3000`                  |
//! | `DATABASE_URL`         | `sqlite://inventory.db` |
//! | `DB_MAX_CONNECTIONS`   | `5`                     |
//! | `CORS_ORIGINS`         | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS` | `30`                    |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A variable was set to something that does not parse.
#[derive(Debug, thiserror::Error)]
#[error("{var} has an invalid value '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// SQLite URL; the file is created on first start.
    pub database_url: String,
    pub db_max_connections: u32,
    /// Origins allowed by CORS, already validated as header values.
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source. Unset and blank variables
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host: IpAddr = parse_or(get("HOST"), "HOST", DEFAULT_HOST)?;
        let port: u16 = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let db_max_connections: u32 = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let timeout_secs: u64 = parse_or(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| ConfigError {
                    var: "CORS_ORIGINS",
                    value: o.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections,
            cors_origins,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse().map_err(|_| ConfigError { var, value }),
        None => Ok(default),
    }
}
