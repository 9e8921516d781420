use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
};

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: Ipv4Addr,
    pub bind_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_port(env::var("PORT").ok().as_deref())
    }

    /// Builds the config from a raw `PORT` value; missing or invalid values fall back to 8080.
    pub fn from_port(port: Option<&str>) -> Self {
        let bind_port = port
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| match value.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!(value, default = DEFAULT_PORT, "ignoring invalid PORT");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_addr: Ipv4Addr::UNSPECIFIED,
            bind_port,
        }
    }

    pub fn bind_socket(&self) -> SocketAddr {
        SocketAddr::from((self.bind_addr, self.bind_port))
    }
}
