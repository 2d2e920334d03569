use crate::error::{CatalogError, Result};
use dashmap::DashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SEED_PATH: &str = "data/products.json";
pub const DEFAULT_LOG_FILTER: &str = "shopinow=info";

/// Key/value configuration source
///
/// `from_env` snapshots the process environment; values can be overridden
/// with [`ConfigService::set`] before the typed config is read.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a value, falling back to `default` when the key is unset.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| CatalogError::Config(format!("{}={:?}: {}", key, raw, e))),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Typed server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self> {
        Ok(Self {
            host: config.get_or("HOST", DEFAULT_HOST),
            port: config.parse_or("PORT", DEFAULT_PORT)?,
            seed_path: PathBuf::from(config.get_or("CATALOG_SEED_PATH", DEFAULT_SEED_PATH)),
            log_filter: config.get_or("LOG_FILTER", DEFAULT_LOG_FILTER),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_service(&ConfigService::from_env())
    }

    /// `host:port`, resolved by the listener so host names are accepted.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
