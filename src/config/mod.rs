//! Configuration loading for the facility booking engine.
//!
//! This module loads the facility registry from YAML files: venue metadata
//! and one rate table per facility.
//!
//! # Example
//!
//! ```no_run
//! use facility_booking::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded venue: {}", config.registry().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, parse_utc_offset};
pub use types::{FacilityConfig, RegistryConfig, RegistryMetadata};
