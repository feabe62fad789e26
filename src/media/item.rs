//! Download candidate representation.

use chrono::{DateTime, NaiveDateTime};

use crate::config::FilenameMode;
use crate::fs::naming::{generated_filename, sanitize_filename};

/// A file matching a requested format, ready to become a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Publish time of the post the file belongs to.
    pub published: NaiveDateTime,

    /// Server path, e.g. `/ab/cd/abcdef.png`.
    pub remote_path: String,

    /// Original display name of the file, if the API had one.
    pub original_name: Option<String>,

    /// Requested extension this candidate matched (without dot).
    pub extension: String,
}

impl Candidate {
    /// Target filename for the given mode.
    ///
    /// Original mode falls back to the generated name when the attachment
    /// has no usable name.
    pub fn filename(&self, mode: FilenameMode) -> String {
        match mode {
            FilenameMode::Generated => self.generated_filename(),
            FilenameMode::Original => self.original_filename().unwrap_or_else(|| {
                tracing::warn!(
                    "No usable original filename for {}, using generated name",
                    self.remote_path
                );
                self.generated_filename()
            }),
        }
    }

    /// Sanitized original filename, if any.
    pub fn original_filename(&self) -> Option<String> {
        self.original_name
            .as_deref()
            .and_then(|name| sanitize_filename(name).ok())
    }

    fn generated_filename(&self) -> String {
        generated_filename(&self.published, &self.remote_path)
    }
}

/// Parse an API publish timestamp.
///
/// Accepts naive ISO-8601 (`2021-01-01T00:00:00`, optional fraction) and
/// RFC 3339 with an offset, keeping the wall-clock time of the latter.
pub fn parse_published(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candidate(name: Option<&str>) -> Candidate {
        Candidate {
            published: parse_published("2021-06-15T10:30:00").unwrap(),
            remote_path: "/ab/cd/file.png".into(),
            original_name: name.map(String::from),
            extension: "png".into(),
        }
    }

    #[test]
    fn test_parse_published() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_published("2021-01-01T00:00:00"), Some(expected));
        assert_eq!(parse_published("2021-01-01 00:00:00"), Some(expected));
        assert_eq!(parse_published("2021-01-01T00:00:00.000"), Some(expected));
        assert_eq!(parse_published("2021-01-01T00:00:00+09:00"), Some(expected));
        assert_eq!(parse_published("yesterday"), None);
        assert_eq!(parse_published(""), None);
    }

    #[test]
    fn test_generated_mode() {
        let c = candidate(Some("Cover Art.png"));
        assert_eq!(
            c.filename(FilenameMode::Generated),
            "2021_06_15_10_30_00-ab_cd_file.png"
        );
    }

    #[test]
    fn test_original_mode() {
        let c = candidate(Some("Cover: Art.png"));
        assert_eq!(c.filename(FilenameMode::Original), "Cover_ Art.png");
    }

    #[test]
    fn test_original_mode_fallback() {
        assert_eq!(
            candidate(None).filename(FilenameMode::Original),
            "2021_06_15_10_30_00-ab_cd_file.png"
        );
        assert_eq!(
            candidate(Some("  ")).filename(FilenameMode::Original),
            "2021_06_15_10_30_00-ab_cd_file.png"
        );
    }
}
