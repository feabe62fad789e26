//! Filename and folder name generation.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid slug regex"));

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("valid separator regex"));

/// Turn a display name into a filesystem-safe token.
///
/// NFKC-normalizes, lowercases, drops everything but word characters,
/// whitespace and hyphens, collapses whitespace/hyphen runs into a single
/// hyphen and trims hyphens and underscores from both ends. Returns
/// `blank_substitute` if nothing is left.
pub fn slugify(value: &str, blank_substitute: &str) -> String {
    let normalized: String = value.nfkc().collect();
    let lowered = normalized.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let collapsed = SEPARATOR_RUNS.replace_all(&stripped, "-");
    let slug = collapsed.trim_matches(|c| c == '-' || c == '_');

    if slug.is_empty() {
        blank_substitute.to_string()
    } else {
        slug.to_string()
    }
}

/// Default manifest filename: `YYYY_MM_DD_HH_MM_SS-<remote path>`.
///
/// Slashes in the remote path become underscores, minus the leading one.
pub fn generated_filename(published: &NaiveDateTime, remote_path: &str) -> String {
    let flattened = remote_path.replace('/', "_");
    let flattened = flattened.strip_prefix('_').unwrap_or(&flattened);

    format!("{}-{}", published.format("%Y_%m_%d_%H_%M_%S"), flattened)
}

/// Sanitize an original attachment name for use as a target filename.
///
/// Path separators and characters invalid on common filesystems are replaced
/// with underscores. Names that would resolve to a directory are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized == "." || sanitized == ".." {
        return Err(Error::InvalidFilename(format!(
            "Filename cannot be '{}'",
            sanitized
        )));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Alice Wonder", "1"), "alice-wonder");
        assert_eq!(slugify("  --Hello,   World!--  ", "1"), "hello-world");
        assert_eq!(slugify("snake_case_name", "1"), "snake_case_name");
        assert_eq!(slugify("__under__", "1"), "under");
    }

    #[test]
    fn test_slugify_unicode() {
        // Full-width letters fold to ASCII under NFKC.
        assert_eq!(slugify("Ａｌｉｃｅ", "1"), "alice");
        assert_eq!(slugify("さくら 桜", "1"), "さくら-桜");
        assert_eq!(slugify("Zoë", "1"), "zoë");
    }

    #[test]
    fn test_slugify_blank_substitute() {
        assert_eq!(slugify("", "12345"), "12345");
        assert_eq!(slugify("!!!", "12345"), "12345");
        assert_eq!(slugify(" - _ - ", "12345"), "12345");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in [
            "Alice Wonder",
            "  --Hello,   World!--  ",
            "Ｆｕｌｌ　Ｗｉｄｔｈ",
            "a - b _ c",
            "ÀÉÎÕÜ ß",
            "___",
            "x_-_y",
        ] {
            let once = slugify(input, "7");
            assert_eq!(slugify(&once, "7"), once, "input {:?}", input);
            assert!(!once.is_empty());
        }
    }

    #[test]
    fn test_generated_filename() {
        let published = NaiveDate::from_ymd_opt(2021, 6, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            generated_filename(&published, "/ab/cd/file.png"),
            "2021_06_15_10_30_00-ab_cd_file.png"
        );
        assert_eq!(
            generated_filename(&published, "file.png"),
            "2021_06_15_10_30_00-file.png"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("normal.png").unwrap(), "normal.png");
        assert_eq!(sanitize_filename("a/b\\c.png").unwrap(), "a_b_c.png");
        assert_eq!(
            sanitize_filename("what?*.png").unwrap(),
            "what__.png"
        );
        assert_eq!(sanitize_filename("x..y.png").unwrap(), "x..y.png");
    }

    #[test]
    fn test_sanitize_filename_rejects() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename(".").is_err());
    }
}
