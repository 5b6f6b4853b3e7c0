// src/app.rs

use crate::config::{AppConfig, ConfigError};
use crate::domain::catalog::RoomCatalog;

/// Everything a request handler can see. Built once at startup and only
/// ever shared by reference.
#[derive(Debug, Clone)]
pub struct App {
    pub config: AppConfig,
    pub catalog: RoomCatalog,
}

impl App {
    pub fn new(config: AppConfig, catalog: RoomCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(config, catalog))
    }
}
