//! End-to-end run for one creator.

use crate::api::KemonoApi;
use crate::config::{parse_profile_url, Config, RunMode};
use crate::dedup::remove_duplicates_by_path;
use crate::download::creator::{fetch_post_count, resolve_creator_name};
use crate::download::posts::fetch_posts;
use crate::download::state::RunState;
use crate::error::Result;
use crate::manifest::{write_manifests, EntryContext};
use crate::media::{extract_candidates, observed_formats};

/// Collect a creator's posts and write manifests (or list formats).
///
/// The profile URL is parsed before any request is made, and the post count
/// is fetched before any manifest file is created. Every page of the profile
/// is collected, whatever offset the URL points at.
pub async fn run_creator(config: &Config, input_url: &str, run_mode: RunMode) -> Result<RunState> {
    let profile = parse_profile_url(input_url, config.pagination.page_size)?;
    let api = KemonoApi::new(&config.site)?;

    let creator_name = resolve_creator_name(&api, &profile).await;
    let mut state = RunState::new(&profile, creator_name, run_mode);

    state.post_count = fetch_post_count(&api, &profile).await?;

    tracing::info!("Service: {}", state.service);
    tracing::info!("Creator ID: {}", state.creator_id);
    tracing::info!("Creator Name: {}", state.creator_name);
    tracing::info!("Creator Post count: {}", state.post_count);

    if profile.page_offset > 0 {
        tracing::info!(
            "Profile URL points at offset {}, collecting all posts from offset 0",
            profile.page_offset
        );
    }

    let fetched = fetch_posts(&api, &config.pagination, &profile, 0, state.post_count).await;

    state.posts_fetched = fetched.posts.len() as u64;
    state.pages_requested = fetched.pages_requested;
    state.pages_failed = fetched.pages_failed;

    if run_mode == RunMode::ListFormats {
        state.observed_formats = observed_formats(&fetched.posts);
        tracing::info!(
            "Found formats: {}",
            state
                .observed_formats
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
        return Ok(state);
    }

    let formats = &config.output.formats;
    let candidates = extract_candidates(&fetched.posts, formats);
    state.candidates_found = candidates.len() as u64;

    let (candidates, removed) = remove_duplicates_by_path(candidates);
    state.duplicates_removed = removed as u64;

    let ctx = EntryContext {
        data_base: &config.site.data_base,
        out_path: &config.output.out_path,
        creator_name: &state.creator_name,
        mode: config.filename_mode(),
    };

    state.manifests = write_manifests(
        &config.output.manifest_dir,
        &state.service,
        formats,
        &candidates,
        &ctx,
    )
    .await?;

    Ok(state)
}
