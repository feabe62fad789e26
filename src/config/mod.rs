//! Configuration module for kemono-manifest.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Profile URL parsing
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod profile;
pub mod validation;

pub use loader::{Config, OutputConfig, PaginationConfig, SiteConfig};
pub use modes::{FilenameMode, RunMode};
pub use profile::{parse_profile_url, ProfileRef};
pub use validation::validate_config;
