//! Download module for collecting a creator's files.
//!
//! This module provides:
//! - Creator post count and name lookups
//! - Post listing pagination
//! - Run state tracking
//! - The end-to-end run that ties them together

pub mod creator;
pub mod posts;
pub mod run;
pub mod state;

pub use creator::{fetch_post_count, resolve_creator_name};
pub use posts::{fetch_posts, page_offsets, sort_by_published, FetchedPosts};
pub use run::run_creator;
pub use state::RunState;
