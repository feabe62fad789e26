//! Run state tracking.

use std::collections::BTreeSet;

use crate::config::{ProfileRef, RunMode};
use crate::manifest::WrittenManifest;

/// Per-creator run state and statistics.
#[derive(Debug, Default)]
pub struct RunState {
    // Creator info
    pub service: String,
    pub creator_id: u64,
    pub creator_name: String,
    pub post_count: u64,

    pub run_mode: RunMode,

    // Pagination
    pub posts_fetched: u64,
    pub pages_requested: u64,
    pub pages_failed: u64,

    // Candidates
    pub candidates_found: u64,
    pub duplicates_removed: u64,

    // Results
    pub manifests: Vec<WrittenManifest>,
    pub observed_formats: BTreeSet<String>,
}

impl RunState {
    /// Create a new run state for a creator.
    pub fn new(profile: &ProfileRef, creator_name: String, run_mode: RunMode) -> Self {
        Self {
            service: profile.service.clone(),
            creator_id: profile.creator_id,
            creator_name,
            run_mode,
            ..Default::default()
        }
    }

    /// Total entries written across all manifests.
    pub fn entries_written(&self) -> usize {
        self.manifests.iter().map(|m| m.entries).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_entries_written() {
        let profile = ProfileRef {
            service: "patreon".into(),
            creator_id: 1,
            page_offset: 0,
        };
        let mut state = RunState::new(&profile, "alice".into(), RunMode::Manifest);
        assert_eq!(state.entries_written(), 0);

        for (ext, entries) in [("png", 3), ("zip", 2)] {
            state.manifests.push(WrittenManifest {
                extension: ext.into(),
                path: PathBuf::from(format!("aria_patreon_alice_{}.txt", ext)),
                entries,
            });
        }
        assert_eq!(state.entries_written(), 5);
        assert_eq!(state.service, "patreon");
    }
}
