//! Filesystem module.
//!
//! Provides:
//! - Creator folder slugs and manifest filenames
//! - Target directory and manifest path construction

pub mod naming;
pub mod paths;

pub use naming::{generated_filename, sanitize_filename, slugify};
pub use paths::{ensure_dir, get_manifest_path, get_target_dir, join_posix};
