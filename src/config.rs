use crate::constants::{
    DEFAULT_BANNER, DEFAULT_LIST_LIMIT, DEFAULT_LISTEN_PORT, DEFAULT_RSF_HOST, DEFAULT_RS_HOST,
    DEFAULT_UP_HOST, DEFAULT_URL_EXPIRY_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub pasv_address: Ipv4Addr, // Address advertised in the 227 reply
    pub banner: String,
    pub list_limit: usize, // Maximum number of entries sent by LIST
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub domain: String, // Public domain serving the bucket, used for RETR
    pub rs_host: String,
    pub rsf_host: String,
    pub up_host: String,
    pub url_expiry_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            pasv_address: Ipv4Addr::LOCALHOST,
            banner: String::from(DEFAULT_BANNER),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            bucket: String::new(),
            domain: String::new(),
            rs_host: String::from(DEFAULT_RS_HOST),
            rsf_host: String::from(DEFAULT_RSF_HOST),
            up_host: String::from(DEFAULT_UP_HOST),
            url_expiry_secs: DEFAULT_URL_EXPIRY_SECS,
        }
    }
}

// The secret key never reaches the logs.
impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"********")
            .field("bucket", &self.bucket)
            .field("domain", &self.domain)
            .field("rs_host", &self.rs_host)
            .field("rsf_host", &self.rsf_host)
            .field("up_host", &self.up_host)
            .field("url_expiry_secs", &self.url_expiry_secs)
            .finish()
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        if config.storage.bucket.is_empty() {
            anyhow::bail!("storage.bucket must be set");
        }
        Ok(config)
    }
}
