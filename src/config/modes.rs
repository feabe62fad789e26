//! Run and filename mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How manifest entries name their target files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameMode {
    /// `{timestamp}-{remote path}` (default).
    #[default]
    Generated,
    /// The attachment's original display name.
    Original,
}

impl fmt::Display for FilenameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenameMode::Generated => write!(f, "generated"),
            FilenameMode::Original => write!(f, "original"),
        }
    }
}

impl FromStr for FilenameMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generated" => Ok(FilenameMode::Generated),
            "original" => Ok(FilenameMode::Original),
            _ => Err(format!("Unknown filename mode: {}", s)),
        }
    }
}

/// What a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Write manifest files for the requested formats.
    #[default]
    Manifest,
    /// Only report which file formats the creator has.
    ListFormats,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Manifest => write!(f, "manifest"),
            RunMode::ListFormats => write!(f, "list formats"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_mode_parse() {
        assert_eq!("Original".parse::<FilenameMode>(), Ok(FilenameMode::Original));
        assert_eq!(
            "generated".parse::<FilenameMode>(),
            Ok(FilenameMode::Generated)
        );
        assert!("random".parse::<FilenameMode>().is_err());
    }
}
