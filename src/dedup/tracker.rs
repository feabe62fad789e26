//! Duplicate tracking by remote path.

use std::collections::HashSet;

use crate::media::Candidate;

/// Remote paths already queued in this run.
#[derive(Debug, Default)]
pub struct SeenPaths {
    paths: HashSet<String>,
}

impl SeenPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path, returning `false` if it was already seen.
    pub fn insert(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }
}

/// Drop candidates whose remote path appeared earlier, keeping order.
///
/// Returns the surviving candidates and the number removed. The timestamp is
/// not part of the key: the same file attached to two posts keeps the first.
pub fn remove_duplicates_by_path(candidates: Vec<Candidate>) -> (Vec<Candidate>, usize) {
    let mut seen = SeenPaths::new();
    let mut removed = 0;

    let uniques = candidates
        .into_iter()
        .filter(|c| {
            if seen.insert(&c.remote_path) {
                true
            } else {
                tracing::debug!("Removing duplicate: {}", c.remote_path);
                removed += 1;
                false
            }
        })
        .collect();

    (uniques, removed)
}
