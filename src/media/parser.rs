//! Candidate extraction from posts.

use std::collections::BTreeSet;

use crate::api::types::Post;
use crate::media::item::{parse_published, Candidate};

/// Collect every file matching one of `extensions`.
///
/// Extensions are the outer loop, so all matches for the first requested
/// format come before any match for the second. Matching is a plain,
/// case-sensitive suffix check on the remote path: a file served as `.bin`
/// never matches `psd` even if its display name ends in `.psd`.
pub fn extract_candidates<S: AsRef<str>>(posts: &[Post], extensions: &[S]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for extension in extensions {
        let extension = extension.as_ref();
        let suffix = format!(".{}", extension);

        for post in posts {
            let matching: Vec<_> = post
                .files()
                .filter(|f| f.path.as_deref().is_some_and(|p| p.ends_with(&suffix)))
                .collect();

            if matching.is_empty() {
                continue;
            }

            let Some(published) = post.published.as_deref().and_then(parse_published) else {
                tracing::warn!(
                    "Skipping post {} with unparseable publish date {:?}",
                    post.id.as_deref().unwrap_or("?"),
                    post.published
                );
                continue;
            };

            for file in matching {
                if let Some(path) = &file.path {
                    candidates.push(Candidate {
                        published,
                        remote_path: path.clone(),
                        original_name: file.name.clone(),
                        extension: extension.to_string(),
                    });
                }
            }
        }
    }

    candidates
}

/// Lowercased extensions of every file across `posts`.
pub fn observed_formats(posts: &[Post]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.files())
        .filter_map(|file| file.path.as_deref())
        .filter_map(extension_of)
        .collect()
}

/// Extension of the last path segment, lowercased.
fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
