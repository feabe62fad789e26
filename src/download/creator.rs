//! Creator profile lookups: post count and folder name.

use crate::api::{KemonoApi, ProfilePage};
use crate::config::ProfileRef;
use crate::error::{Error, Result};
use crate::fs::naming::slugify;

/// Total number of posts a creator has.
///
/// Any failure here is fatal: without a count there is nothing to page through.
/// Transport and body errors are reported as [`Error::PostCount`] so every
/// failure of this step aborts the same way.
pub async fn fetch_post_count(api: &KemonoApi, profile: &ProfileRef) -> Result<u64> {
    let html = api.get_profile_page(profile).await.map_err(|e| {
        tracing::error!(
            "Could not get post count for creator: {} at service {}",
            profile.creator_id,
            profile.service
        );
        if let Error::HttpStatus { status, .. } = &e {
            tracing::error!("Received status code: {}", status);
        }
        match e {
            status_error @ Error::HttpStatus { .. } => status_error,
            other => Error::PostCount(format!(
                "profile page request failed for creator {} at service {}: {}",
                profile.creator_id, profile.service, other
            )),
        }
    })?;

    ProfilePage::parse(&html).post_count().ok_or_else(|| {
        Error::PostCount(format!(
            "no post count in profile page for creator {} at service {}",
            profile.creator_id, profile.service
        ))
    })
}

/// Folder-safe creator name, or the creator ID if it can't be resolved.
pub async fn resolve_creator_name(api: &KemonoApi, profile: &ProfileRef) -> String {
    let fallback = profile.creator_id.to_string();

    let html = match api.get_profile_page(profile).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(
                "Could not get creator name for id: {} at service {}: {}",
                profile.creator_id,
                profile.service,
                e
            );
            tracing::warn!("Using id: {} as default value", fallback);
            return fallback;
        }
    };

    match ProfilePage::parse(&html).display_name() {
        Some(name) => slugify(&name, &fallback),
        None => {
            tracing::warn!(
                "Could not find creator name for id: {} at service {}",
                profile.creator_id,
                profile.service
            );
            tracing::warn!("Using id: {} as default value", fallback);
            fallback
        }
    }
}
