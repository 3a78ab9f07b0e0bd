// config.rs
use crate::errors::ServerError;
use postgres::config::{Host, SslMode};
use std::net::SocketAddr;
use std::str::FromStr;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Hosted providers whose certificates are not verifiable with the system roots.
const RELAXED_TLS_HOSTS: &[&str] = &["amazonaws.com"];

/// Transport encryption policy for database connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS required and certificates verified.
    Require,
    /// TLS required but certificate and hostname checks are skipped.
    Relaxed,
    /// Plain TCP.
    Disable,
}

impl FromStr for TlsMode {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "require" | "verify-full" => Ok(TlsMode::Require),
            "relaxed" | "no-verify" => Ok(TlsMode::Relaxed),
            "disable" | "off" => Ok(TlsMode::Disable),
            other => Err(ServerError::Config(format!(
                "DATABASE_SSL_MODE must be require, relaxed or disable (got '{other}')"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub tls_mode: TlsMode,
    pub pool_size: u32,
    /// Base URL the pages use to reach the JSON API. `None` means in-process.
    pub site_url: Option<Url>,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .ok_or_else(|| ServerError::Config("DATABASE_URL is not set".into()))?;

        let tls_mode = match get("DATABASE_SSL_MODE") {
            Some(mode) => mode.parse()?,
            None => default_tls_mode(&database_url),
        };

        let pool_size = match get("DATABASE_POOL_SIZE") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::Config(format!("DATABASE_POOL_SIZE must be a positive integer (got '{v}')"))
                })?,
            None => DEFAULT_POOL_SIZE,
        };

        let site_url = match get("SITE_URL") {
            Some(raw) => Some(
                Url::parse(raw.trim())
                    .map_err(|e| ServerError::Config(format!("SITE_URL is not a valid URL: {e}")))?,
            ),
            None => None,
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("BIND_ADDR '{bind_raw}' is invalid: {e}")))?;

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::Config(format!("MAX_WORKERS must be a positive integer (got '{v}')"))
                })?,
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Self {
            database_url,
            tls_mode,
            pool_size,
            site_url,
            bind_addr,
            max_workers,
        })
    }
}

/// Mode used when `DATABASE_SSL_MODE` is unset.
///
/// `sslmode=disable` in the connection string turns TLS off. Otherwise TLS is
/// required, relaxed for known providers that need it.
fn default_tls_mode(database_url: &str) -> TlsMode {
    let Ok(pg) = database_url.parse::<postgres::Config>() else {
        return TlsMode::Require;
    };

    if pg.get_ssl_mode() == SslMode::Disable {
        return TlsMode::Disable;
    }

    let relaxed = pg.get_hosts().iter().any(|host| match host {
        Host::Tcp(name) => {
            let name = name.to_ascii_lowercase();
            RELAXED_TLS_HOSTS.iter().any(|suffix| name.ends_with(suffix))
        }
        #[cfg(unix)]
        Host::Unix(_) => false,
    });

    if relaxed {
        TlsMode::Relaxed
    } else {
        TlsMode::Require
    }
}
