use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_BUILD_CONFIG_PATH: &str = "dashboard.config.json";
pub const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SERVER_ADDRESS {value:?}: {source}")]
    InvalidAddress {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: SocketAddr,
    pub build_config_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_address =
            env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());

        Ok(Config {
            server_address: server_address
                .parse()
                .map_err(|source| ConfigError::InvalidAddress {
                    value: server_address.clone(),
                    source,
                })?,
            build_config_path: env::var("BUILD_CONFIG_PATH")
                .unwrap_or_else(|_| DEFAULT_BUILD_CONFIG_PATH.to_string())
                .into(),
            log_dir: env::var("LOG_DIR")
                .unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string())
                .into(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            build_config_path: DEFAULT_BUILD_CONFIG_PATH.into(),
            log_dir: DEFAULT_LOG_DIR.into(),
        }
    }
}
