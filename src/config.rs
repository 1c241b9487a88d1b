//! Service configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable      | Default   | Meaning                                  |
//! |---------------|-----------|------------------------------------------|
//! | `HOST`        | `0.0.0.0` | Bind address                             |
//! | `PORT`        | `3001`    | Bind port                                |
//! | `LISTEN_ADDR` | unset     | Full socket address, overrides the above |
//! | `LOG_FORMAT`  | `pretty`  | `pretty` or `json`                       |

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3001;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is not a socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: AddrParseError,
    },

    /// `HOST` is not an IP address.
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: AddrParseError,
    },

    /// `PORT` is not a valid port number.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an address or port variable is set
    /// but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an address or port variable is set
    /// but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidListenAddr { value, source })?,
            None => {
                let host: IpAddr = match lookup("HOST") {
                    Some(value) => value
                        .parse()
                        .map_err(|source| ConfigError::InvalidHost { value, source })?,
                    None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                };
                let port: u16 = match lookup("PORT") {
                    Some(value) => value
                        .trim()
                        .parse()
                        .map_err(|source| ConfigError::InvalidPort { value, source })?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::new(host, port)
            }
        };

        let log_format = parse_log_format(lookup("LOG_FORMAT").as_deref());

        Ok(Self {
            listen_addr,
            log_format,
        })
    }
}

/// Parses `LOG_FORMAT`, accepting `"json"` case-insensitively and
/// falling back to [`LogFormat::Pretty`] for anything else.
fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}
