//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the facility
//! registry from YAML files.

use std::fs;
use std::path::Path;

use chrono::FixedOffset;
use tracing::{info, warn};

use crate::calculation::validate_rate_table;
use crate::error::{BookingError, BookingResult};
use crate::models::Facility;

use super::types::{FacilityConfig, RegistryConfig, RegistryMetadata};

/// Loads and provides access to the facility registry configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── registry.yaml        # Venue name, currency and default UTC offset
/// └── facilities/
///     ├── clubhouse.yaml   # One file per facility: name and rate tiers
///     └── tennis_court.yaml
/// ```
///
/// Every rate table is validated while loading: overlapping tiers, negative
/// rates and empty tables are rejected, uncovered hours are logged.
///
/// # Example
///
/// ```no_run
/// use facility_booking::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded venue: {}", loader.registry().name);
/// for facility in loader.facilities() {
///     println!("{} has {} rate tiers", facility.name(), facility.rates().len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegistryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The UTC offset cannot be parsed
    /// - Two facilities share a name
    /// - A rate table is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> BookingResult<Self> {
        let path = path.as_ref();

        let registry_path = path.join("registry.yaml");
        let metadata = Self::load_yaml::<RegistryMetadata>(&registry_path)?;
        let utc_offset = parse_utc_offset(&metadata.utc_offset)?;

        let facilities_dir = path.join("facilities");
        let facilities = Self::load_facilities(&facilities_dir)?;

        for facility in &facilities {
            let gaps = validate_rate_table(&facility.name, &facility.rates)?;
            for (start, end) in gaps {
                warn!(
                    facility = %facility.name,
                    gap_start = %start,
                    gap_end = %end,
                    "Rate table leaves hours uncovered; they cannot be booked"
                );
            }
        }

        let config = RegistryConfig::new(metadata, utc_offset, facilities);
        info!(
            registry = %config.registry().name,
            facilities = config.facilities().len(),
            "Loaded facility registry"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BookingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BookingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BookingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all facility files from the facilities directory.
    fn load_facilities(facilities_dir: &Path) -> BookingResult<Vec<FacilityConfig>> {
        let dir_str = facilities_dir.display().to_string();

        if !facilities_dir.exists() {
            return Err(BookingError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(facilities_dir).map_err(|_| BookingError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut facilities: Vec<FacilityConfig> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| BookingError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let facility = Self::load_yaml::<FacilityConfig>(&path)?;
                if facilities.iter().any(|f| f.name == facility.name) {
                    return Err(BookingError::DuplicateFacility {
                        name: facility.name,
                    });
                }
                facilities.push(facility);
            }
        }

        if facilities.is_empty() {
            return Err(BookingError::ConfigNotFound {
                path: format!("{} (no facility files found)", dir_str),
            });
        }

        Ok(facilities)
    }

    /// Returns the underlying registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the registry metadata.
    pub fn registry(&self) -> &RegistryMetadata {
        self.config.registry()
    }

    /// Builds fresh facilities, without bookings, from the configuration.
    pub fn facilities(&self) -> Vec<Facility> {
        self.config
            .facilities()
            .iter()
            .cloned()
            .map(Facility::from)
            .collect()
    }
}

/// Parses an offset such as `+05:30`, `-08:00` or `Z`.
pub fn parse_utc_offset(value: &str) -> BookingResult<FixedOffset> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| BookingError::InvalidTime {
            value: value.to_string(),
            message: "invalid UTC offset".to_string(),
        });
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|e| BookingError::InvalidTime {
            value: value.to_string(),
            message: format!("invalid UTC offset: {}", e),
        })
}
