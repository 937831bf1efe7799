//! Configuration for the inventory service
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{InventoryError, Result};

/// Main configuration for an inventory service instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Database file holding the inventory namespace
    /// Created on first start if it does not exist.
    pub db_path: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Max accepted request body size (bytes)
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./inventory.db"),
            listen_addr: "127.0.0.1:8080".to_string(),
            body_limit_bytes: 1024 * 1024, // 1 MB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the service cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(InventoryError::Config("db_path must not be empty".to_string()));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(InventoryError::Config(
                "listen_addr must not be empty".to_string(),
            ));
        }
        if self.body_limit_bytes == 0 {
            return Err(InventoryError::Config(
                "body_limit_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum request body size (in bytes)
    pub fn body_limit_bytes(mut self, bytes: usize) -> Self {
        self.config.body_limit_bytes = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
