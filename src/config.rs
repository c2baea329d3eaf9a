use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dispatch: DispatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            request_timeout_secs: 10,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Requests with more plants are rejected. The search visits
    /// `2^max_plants - 1` combinations in the worst case.
    pub max_plants: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { max_plants: 20 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,production_plan=info,hyper=warn,tower_http=info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl Config {
    /// Defaults, overridden by `config/default.toml`, overridden by
    /// `DISPATCH__SECTION__KEY` environment variables
    pub fn load() -> Result<Self> {
        Ok(Self::figment("config/default.toml").extract()?)
    }

    pub fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("DISPATCH__").split("__"))
    }
}
