use std::{net::SocketAddr, sync::LazyLock};

use anyhow::Context;

pub const LISTEN_ENV: &str = "USUARIOS_LISTEN";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

pub struct ServerConfig {
    listen_addr: String,
}

impl ServerConfig {
    pub fn new(listen_addr: &str) -> Self {
        Self {
            listen_addr: listen_addr.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let listen_addr = std::env::var(LISTEN_ENV).unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        Self::new(&listen_addr)
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("invalid {} value: {}", LISTEN_ENV, self.listen_addr))
    }
}

pub fn config() -> &'static ServerConfig {
    static CONFIG: LazyLock<ServerConfig> = LazyLock::new(ServerConfig::from_env);
    &CONFIG
}
