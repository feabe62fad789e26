//! Command-line interface.

pub mod args;

pub use args::{Args, LOCAL_CONFIG_FILE};
