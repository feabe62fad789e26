//! aria2 input-file directives.

use std::fmt;

use url::form_urlencoded;

use crate::config::FilenameMode;
use crate::fs::paths::get_target_dir;
use crate::media::Candidate;

/// One download directive: where to fetch a file and where to save it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub url: String,
    pub dir: String,
    pub out: String,
}

/// Settings shared by every entry of a run.
#[derive(Debug, Clone)]
pub struct EntryContext<'a> {
    /// Attachment host prefix, without trailing slash.
    pub data_base: &'a str,
    /// Root directory the download manager saves into.
    pub out_path: &'a str,
    pub creator_name: &'a str,
    pub mode: FilenameMode,
}

impl ManifestEntry {
    /// Build the directive for a candidate.
    pub fn from_candidate(candidate: &Candidate, ctx: &EntryContext<'_>) -> Self {
        let mut url = format!("{}{}", ctx.data_base, candidate.remote_path);

        if ctx.mode == FilenameMode::Original {
            if let Some(name) = candidate.original_filename() {
                let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
                url.push_str("?f=");
                url.push_str(&encoded);
            }
        }

        Self {
            url,
            dir: get_target_dir(ctx.out_path, ctx.creator_name, &candidate.extension),
            out: candidate.filename(ctx.mode),
        }
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\tdir={}\n\tout={}\n", self.url, self.dir, self.out)
    }
}
