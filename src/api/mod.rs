//! Kemono API module.
//!
//! This module provides:
//! - HTTP client for profile pages and the post listing API
//! - Profile page scraping
//! - API response types

pub mod client;
pub mod page;
pub mod types;

pub use client::KemonoApi;
pub use page::ProfilePage;
pub use types::*;
