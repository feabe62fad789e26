//! Deduplication module.
//!
//! Candidates are deduplicated on their remote path before any manifest is
//! written.

pub mod tracker;

pub use tracker::{remove_duplicates_by_path, SeenPaths};
