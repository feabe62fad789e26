//! kemono-manifest - aria2 download lists for Kemono creators
//!
//! This library collects a creator's posts from the Kemono API and turns the
//! attachments of the requested formats into aria2 input files.
//!
//! # Pipeline
//!
//! - Parse the creator's profile URL
//! - Scrape the post count and display name from the profile page
//! - Page through the post listing API
//! - Extract and deduplicate matching attachments
//! - Write one manifest per format
//!
//! # Example
//!
//! ```no_run
//! use kemono_manifest::{run_creator, Config, RunMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.output.formats = vec!["png".into(), "zip".into()];
//!
//!     let state = run_creator(
//!         &config,
//!         "https://kemono.su/patreon/user/12345",
//!         RunMode::Manifest,
//!     )
//!     .await?;
//!     println!("{} entries written", state.entries_written());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::KemonoApi;
pub use config::{Config, FilenameMode, ProfileRef, RunMode};
pub use download::{run_creator, RunState};
pub use error::{Error, Result};
pub use media::Candidate;
