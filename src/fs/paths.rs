//! Manifest and target path construction.
//!
//! Target directories are written into the manifest and interpreted by the
//! download manager, so they are built as `/`-separated strings rather than
//! `PathBuf`s.

use std::path::{Path, PathBuf};

/// Join path segments with `/`, converting any backslashes in the root.
pub fn join_posix(root: &str, segments: &[&str]) -> String {
    let mut joined = root.replace('\\', "/");

    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if !joined.is_empty() && !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(segment);
    }

    joined
}

/// Directory the download manager saves a creator's files of one format to.
pub fn get_target_dir(out_path: &str, creator_name: &str, extension: &str) -> String {
    let creator_folder = creator_name.to_lowercase();
    let format_folder = extension.to_uppercase();
    join_posix(out_path, &[creator_folder.as_str(), format_folder.as_str()])
}

/// Manifest file for one service, creator and format.
pub fn get_manifest_path(
    manifest_dir: &Path,
    service: &str,
    creator_name: &str,
    extension: &str,
) -> PathBuf {
    manifest_dir.join(format!(
        "aria_{}_{}_{}.txt",
        service,
        creator_name,
        extension.to_uppercase()
    ))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_posix() {
        assert_eq!(join_posix("./dump", &["alice", "PNG"]), "./dump/alice/PNG");
        assert_eq!(join_posix("./dump/", &["alice", "PNG"]), "./dump/alice/PNG");
        assert_eq!(
            join_posix("C:\\Users\\me\\dump", &["alice", "PNG"]),
            "C:/Users/me/dump/alice/PNG"
        );
        assert_eq!(join_posix("", &["alice"]), "alice");
    }

    #[test]
    fn test_get_target_dir() {
        assert_eq!(get_target_dir("./dump", "alice", "png"), "./dump/alice/PNG");
        assert_eq!(
            get_target_dir("/data", "MixedCase", "tar.gz"),
            "/data/mixedcase/TAR.GZ"
        );
    }

    #[test]
    fn test_get_manifest_path() {
        let path = get_manifest_path(Path::new("/tmp/out"), "patreon", "alice", "png");
        assert_eq!(path, PathBuf::from("/tmp/out/aria_patreon_alice_PNG.txt"));
    }

    #[tokio::test]
    async fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).await.unwrap();
    }
}
