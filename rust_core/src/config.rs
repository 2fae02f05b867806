//! Configuration file support.
//!
//! Settings are read from a TOML file. Every section and field has a
//! default, so an empty file (or no file at all, via [`CoreConfig::default`])
//! is a valid configuration.
//!
//! ```toml
//! [proximity]
//! default_radius_km = 50.0
//! max_results = 100
//! hydrate_batch_size = 10
//!
//! [hours]
//! missing_schedule = "open"
//!
//! [fees]
//! application_fee_bps = 250
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::domain::{GeoPoint, MissingSchedulePolicy, ProximityQuery};
use crate::error::ConfigError;

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub proximity: ProximitySettings,
    #[serde(default)]
    pub hours: HoursSettings,
    #[serde(default)]
    pub fees: FeeSettings,
}

/// Proximity search defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximitySettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Maximum ids per batch read against the store.
    #[serde(default = "default_hydrate_batch_size")]
    pub hydrate_batch_size: usize,
}

/// Business-hours settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursSettings {
    #[serde(default)]
    pub missing_schedule: MissingSchedulePolicy,
}

/// Marketplace fee settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSettings {
    /// Platform application fee in basis points (1/100 of a percent).
    #[serde(default)]
    pub application_fee_bps: u32,
}

fn default_radius_km() -> f64 {
    50.0
}

fn default_max_results() -> usize {
    100
}

fn default_hydrate_batch_size() -> usize {
    10
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            max_results: default_max_results(),
            hydrate_batch_size: default_hydrate_batch_size(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if it
    /// is not valid TOML, `ConfigError::Invalid` if a value is out of range.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `truckmap.toml` in:
    /// 1. Current directory
    /// 2. `rust_core/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("truckmap.toml"),
            PathBuf::from("rust_core/truckmap.toml"),
            PathBuf::from("../truckmap.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.proximity;
        if !p.default_radius_km.is_finite() || p.default_radius_km <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "proximity.default_radius_km must be positive, got {}",
                p.default_radius_km
            )));
        }
        if p.max_results == 0 {
            return Err(ConfigError::Invalid(
                "proximity.max_results must be greater than zero".to_string(),
            ));
        }
        if p.hydrate_batch_size == 0 {
            return Err(ConfigError::Invalid(
                "proximity.hydrate_batch_size must be greater than zero".to_string(),
            ));
        }
        if self.fees.application_fee_bps > 10_000 {
            return Err(ConfigError::Invalid(format!(
                "fees.application_fee_bps must be at most 10000, got {}",
                self.fees.application_fee_bps
            )));
        }
        Ok(())
    }

    /// A query around `center` using the configured radius and limit.
    pub fn to_query(&self, center: GeoPoint) -> Result<ProximityQuery, ConfigError> {
        Ok(ProximityQuery::new(
            center,
            self.proximity.default_radius_km,
            self.proximity.max_results,
        )?)
    }
}
