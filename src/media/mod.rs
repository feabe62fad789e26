//! Media module for download candidates.

pub mod item;
pub mod parser;

pub use item::{parse_published, Candidate};
pub use parser::{extract_candidates, observed_formats};
