// Environment-driven configuration for the serving shell.
//
// Defaults keep local serving zero-config; a bad port value is a
// construction failure surfaced by the entry point.

use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("ID_ISSUANCE_HOST").ok(),
            std::env::var("ID_ISSUANCE_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid ID_ISSUANCE_PORT: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
