//! Configuration structures and loading logic.

use crate::config::modes::FilenameMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote endpoints and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the HTML site (profile pages).
    #[serde(default = "default_web_base")]
    pub web_base: String,

    /// Base URL of the JSON API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL prefixed to attachment paths in the manifest.
    #[serde(default = "default_data_base")]
    pub data_base: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Listing API pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Posts returned per API page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Delay after each page request for large creators.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Creators with more than this many pages get the delay.
    #[serde(default = "default_delay_threshold_pages")]
    pub delay_threshold_pages: u64,
}

/// Manifest output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory the download manager saves files under.
    #[serde(default = "default_out_path")]
    pub out_path: String,

    /// Directory the manifest files are written to.
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: PathBuf,

    /// Use the attachment's original filename instead of a generated one.
    #[serde(default)]
    pub use_original_filename: bool,

    /// File extensions to collect.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            web_base: default_web_base(),
            api_base: default_api_base(),
            data_base: default_data_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            request_delay_ms: default_request_delay_ms(),
            delay_threshold_pages: default_delay_threshold_pages(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_path: default_out_path(),
            manifest_dir: default_manifest_dir(),
            use_original_filename: false,
            formats: default_formats(),
        }
    }
}

fn default_web_base() -> String {
    "https://kemono.su".to_string()
}

fn default_api_base() -> String {
    "https://kemono.su/api/v1".to_string()
}

fn default_data_base() -> String {
    "https://c5.kemono.su/data".to_string()
}

fn default_user_agent() -> String {
    format!("kemono-manifest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u64 {
    50
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_delay_threshold_pages() -> u64 {
    5
}

fn default_out_path() -> String {
    "./kemono_dump".to_string()
}

fn default_manifest_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> Vec<String> {
    vec!["png".to_string()]
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Platform config file location, e.g. `~/.config/kemono-manifest/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "kemono-manifest")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Strip trailing slashes from base URLs so paths can be appended directly.
    pub fn normalize(&mut self) {
        for base in [
            &mut self.site.web_base,
            &mut self.site.api_base,
            &mut self.site.data_base,
        ] {
            while base.ends_with('/') {
                base.pop();
            }
        }
    }

    /// Filename mode derived from the output options.
    pub fn filename_mode(&self) -> FilenameMode {
        if self.output.use_original_filename {
            FilenameMode::Original
        } else {
            FilenameMode::Generated
        }
    }
}

impl PaginationConfig {
    /// Whether paging through `post_count` posts needs the inter-request delay.
    pub fn needs_request_delay(&self, post_count: u64) -> bool {
        post_count > self.delay_threshold_pages * self.page_size
    }
}
