//! Creator profile URL parsing.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// `https://<host>/<service>/user/<id>[?o=<offset>]`, anchored at the start only.
static PROFILE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://[^/?#\s]+/(\w+)/user/(\d+)(?:\?o=(\d+))?").expect("valid profile regex")
});

/// A creator profile identified by service and numeric ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRef {
    pub service: String,
    pub creator_id: u64,
    /// Listing offset, always a multiple of the page size.
    pub page_offset: u64,
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/user/{}", self.service, self.creator_id)
    }
}

/// Parse a profile URL, flooring the page offset to a multiple of `page_size`.
pub fn parse_profile_url(input: &str, page_size: u64) -> Result<ProfileRef> {
    let input = input.trim();

    let captures = PROFILE_URL
        .captures(input)
        .ok_or_else(|| Error::ProfileUrl(input.to_string()))?;

    let service = captures[1].to_string();
    let creator_id: u64 = captures[2]
        .parse()
        .map_err(|_| Error::ProfileUrl(format!("creator ID out of range in {}", input)))?;

    let mut page_offset: u64 = match captures.get(3) {
        Some(offset) => offset
            .as_str()
            .parse()
            .map_err(|_| Error::ProfileUrl(format!("page offset out of range in {}", input)))?,
        None => 0,
    };

    if page_size > 0 && page_offset % page_size != 0 {
        tracing::warn!(
            "Page offset: {} not a multiple of {}",
            page_offset,
            page_size
        );
        page_offset = (page_offset / page_size) * page_size;
        tracing::warn!("Page offset coerced to: {}", page_offset);
    }

    Ok(ProfileRef {
        service,
        creator_id,
        page_offset,
    })
}
