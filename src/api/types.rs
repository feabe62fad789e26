//! API response type definitions.

use serde::Deserialize;

/// A post from the creator listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    /// ISO-8601 publish timestamp, e.g. `2021-01-01T00:00:00`.
    #[serde(default)]
    pub published: Option<String>,
    /// Primary file; `null` and `{}` both mean no file.
    #[serde(default)]
    pub file: Option<FileRef>,
    #[serde(default)]
    pub attachments: Vec<FileRef>,
}

/// A file attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileRef {
    /// Server path, e.g. `/ab/cd/abcdef.png`.
    #[serde(default)]
    pub path: Option<String>,
    /// Original display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Post {
    /// Sort key for ordering posts by publish time.
    pub fn published_key(&self) -> &str {
        self.published.as_deref().unwrap_or("")
    }

    /// Primary file (if it has a path) followed by the attachments.
    pub fn files(&self) -> impl Iterator<Item = &FileRef> {
        self.file
            .iter()
            .chain(self.attachments.iter())
            .filter(|f| f.path.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_post_list() {
        let json = r#"[
            {"id": "1", "published": "2021-01-02T00:00:00", "file": null,
             "attachments": [{"path": "/a/1.png", "name": "x"}]},
            {"id": "2", "published": "2021-01-03T00:00:00", "file": {},
             "attachments": []},
            {"id": "3", "published": "2021-01-04T00:00:00",
             "file": {"path": "/b/2.jpg", "name": "cover.jpg"},
             "attachments": [{"path": "/c/3.zip", "name": "pack.zip"}],
             "content": "ignored", "shared_file": false}
        ]"#;

        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts[0].file.is_none());
        assert_eq!(posts[0].files().count(), 1);
        assert_eq!(posts[1].files().count(), 0);

        let paths: Vec<_> = posts[2]
            .files()
            .filter_map(|f| f.path.as_deref())
            .collect();
        assert_eq!(paths, vec!["/b/2.jpg", "/c/3.zip"]);
    }

    #[test]
    fn test_missing_published_sorts_first() {
        let post = Post::default();
        assert_eq!(post.published_key(), "");
    }
}
