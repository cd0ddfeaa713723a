//! Server configuration.
//!
//! Defaults, overridden by environment variables (a `.env` file is loaded by
//! the binary), overridden in turn by command-line flags.
//!
//! | Variable                      | Default   |
//! |-------------------------------|-----------|
//! | `MATRIXOPS_HOST`              | `0.0.0.0` |
//! | `MATRIXOPS_PORT`              | `8080`    |
//! | `MATRIXOPS_MAX_UPLOAD_BYTES`  | 2 MiB     |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ConfigError;

pub const ENV_HOST: &str = "MATRIXOPS_HOST";
pub const ENV_PORT: &str = "MATRIXOPS_PORT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MATRIXOPS_MAX_UPLOAD_BYTES";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Settings for [`crate::api::server::start_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: read_var(&lookup, ENV_HOST)?.unwrap_or(defaults.host),
            port: read_var(&lookup, ENV_PORT)?.unwrap_or(defaults.port),
            max_upload_bytes: read_var(&lookup, ENV_MAX_UPLOAD_BYTES)?
                .unwrap_or(defaults.max_upload_bytes),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
