//! Manifest file writing.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::Result;
use crate::fs::paths::{ensure_dir, get_manifest_path};
use crate::manifest::entry::{EntryContext, ManifestEntry};
use crate::media::Candidate;

/// An open manifest file, written one directive at a time.
pub struct ManifestWriter {
    path: PathBuf,
    file: BufWriter<File>,
    entries: usize,
}

impl ManifestWriter {
    /// Create (or truncate) a manifest file.
    pub async fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).await?;
        Ok(Self {
            path: path.to_path_buf(),
            file: BufWriter::new(file),
            entries: 0,
        })
    }

    pub async fn write_entry(&mut self, entry: &ManifestEntry) -> Result<()> {
        self.file.write_all(entry.to_string().as_bytes()).await?;
        self.entries += 1;
        Ok(())
    }

    /// Flush and return the number of entries written.
    pub async fn finish(mut self) -> Result<usize> {
        self.file.flush().await?;
        Ok(self.entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A manifest file written for one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenManifest {
    pub extension: String,
    pub path: PathBuf,
    pub entries: usize,
}

/// Write one manifest per requested extension.
///
/// Each file holds the candidates that matched its extension, in order.
pub async fn write_manifests<S: AsRef<str>>(
    manifest_dir: &Path,
    service: &str,
    extensions: &[S],
    candidates: &[Candidate],
    ctx: &EntryContext<'_>,
) -> Result<Vec<WrittenManifest>> {
    ensure_dir(manifest_dir).await?;

    let mut written = Vec::new();

    for extension in extensions {
        let extension = extension.as_ref();
        let path = get_manifest_path(manifest_dir, service, ctx.creator_name, extension);
        let mut writer = ManifestWriter::create(&path).await?;

        for candidate in candidates.iter().filter(|c| c.extension == extension) {
            let entry = ManifestEntry::from_candidate(candidate, ctx);
            writer.write_entry(&entry).await?;
        }

        let entries = writer.finish().await?;
        tracing::info!(
            "Successfully wrote {} entries to file: {}",
            entries,
            path.display()
        );

        written.push(WrittenManifest {
            extension: extension.to_string(),
            path,
            entries,
        });
    }

    Ok(written)
}
