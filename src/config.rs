// src/config.rs

use crate::domain::catalog::{RoomCatalog, RoomOption, DEFAULT_RATE, MAX_RATE};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_WORKERS: usize = 8;
pub const HOTEL_NAME: &str = "Гранд Отель";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },

    #[error("failed to read room catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse room catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid room '{id}' in catalog: {reason}")]
    InvalidRoom { id: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    /// Room picker with per-room rates.
    Catalog,
    /// One fixed nightly rate, no room picker.
    Flat,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub pricing: PricingMode,
    pub default_rate: i64,
    /// JSON array of rooms replacing the built-in list.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_WORKERS,
            pricing: PricingMode::Catalog,
            default_rate: DEFAULT_RATE,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Read `BOOKING_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = parse_var(&lookup, "BOOKING_ADDR")?.unwrap_or(defaults.addr);
        let max_workers = parse_var(&lookup, "BOOKING_WORKERS")?.unwrap_or(defaults.max_workers);
        let default_rate =
            parse_var(&lookup, "BOOKING_DEFAULT_RATE")?.unwrap_or(defaults.default_rate);

        let pricing = match lookup("BOOKING_PRICING").as_deref() {
            None | Some("") | Some("catalog") => PricingMode::Catalog,
            Some("flat") => PricingMode::Flat,
            Some(other) => {
                return Err(ConfigError::InvalidVar {
                    var: "BOOKING_PRICING",
                    value: other.to_string(),
                })
            }
        };

        if max_workers == 0 {
            return Err(ConfigError::InvalidVar {
                var: "BOOKING_WORKERS",
                value: "0".into(),
            });
        }
        if !(0..=MAX_RATE).contains(&default_rate) {
            return Err(ConfigError::InvalidVar {
                var: "BOOKING_DEFAULT_RATE",
                value: default_rate.to_string(),
            });
        }

        let catalog_path = lookup("BOOKING_CATALOG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            max_workers,
            pricing,
            default_rate,
            catalog_path,
        })
    }

    /// Build the room catalog this configuration describes.
    pub fn load_catalog(&self) -> Result<RoomCatalog, ConfigError> {
        if self.pricing == PricingMode::Flat {
            return Ok(RoomCatalog::flat(self.default_rate));
        }

        let Some(path) = &self.catalog_path else {
            return Ok(RoomCatalog::new(self.default_rate, RoomCatalog::builtin().rooms));
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let rooms: Vec<RoomOption> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
                path: path.clone(),
                source,
            })?;

        validate_rooms(&rooms)?;

        info!(path = %path.display(), rooms = rooms.len(), "loaded room catalog");
        Ok(RoomCatalog::new(self.default_rate, rooms))
    }
}

/// Rates must sit in `0..=MAX_RATE` and ids must be unique, otherwise the
/// room picker and the price lookup disagree.
fn validate_rooms(rooms: &[RoomOption]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for room in rooms {
        let invalid = |reason: String| ConfigError::InvalidRoom {
            id: room.id.clone(),
            reason,
        };

        if room.id.is_empty() {
            return Err(invalid("empty id".into()));
        }
        if !seen.insert(room.id.as_str()) {
            return Err(invalid("duplicate id".into()));
        }
        if !(0..=MAX_RATE).contains(&room.price_per_night) {
            return Err(invalid(format!(
                "pricePerNight {} outside 0..={MAX_RATE}",
                room.price_per_night
            )));
        }
    }

    Ok(())
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var).filter(|v| !v.trim().is_empty()) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}
