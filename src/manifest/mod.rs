//! Manifest module.
//!
//! Builds aria2 input-file directives from candidates and writes them out,
//! one file per requested format.

pub mod entry;
pub mod writer;

pub use entry::{EntryContext, ManifestEntry};
pub use writer::{write_manifests, ManifestWriter, WrittenManifest};
