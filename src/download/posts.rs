//! Post listing pagination.

use std::time::Duration;

use tokio::time::sleep;

use crate::api::{KemonoApi, Post};
use crate::config::{PaginationConfig, ProfileRef};
use crate::output::create_item_bar;

/// Posts collected by [`fetch_posts`].
#[derive(Debug, Default)]
pub struct FetchedPosts {
    /// All posts, oldest first.
    pub posts: Vec<Post>,
    pub pages_requested: u64,
    pub pages_failed: u64,
}

/// Page offsets from `from_offset` up to (excluding) `to_offset`.
pub fn page_offsets(from_offset: u64, to_offset: u64, page_size: u64) -> Vec<u64> {
    if page_size == 0 {
        return Vec::new();
    }
    (from_offset..to_offset).step_by(page_size as usize).collect()
}

/// Fetch every listing page between two offsets.
///
/// A page that fails is logged and skipped, so a bad page only means fewer
/// posts. For creators with more than `delay_threshold_pages` pages a fixed
/// delay follows every request. The result is sorted by publish date.
pub async fn fetch_posts(
    api: &KemonoApi,
    pagination: &PaginationConfig,
    profile: &ProfileRef,
    from_offset: u64,
    to_offset: u64,
) -> FetchedPosts {
    let offsets = page_offsets(from_offset, to_offset, pagination.page_size);
    let delay = if pagination.needs_request_delay(to_offset) {
        Some(Duration::from_millis(pagination.request_delay_ms))
    } else {
        None
    };

    let mut fetched = FetchedPosts::default();
    let bar = create_item_bar(offsets.len() as u64, "Fetching pages");

    for offset in offsets {
        fetched.pages_requested += 1;

        match api.get_posts(profile, offset).await {
            Ok(posts) => {
                tracing::info!("Getting: {}", api.posts_url(profile, offset));
                fetched.posts.extend(posts);
            }
            Err(e) => {
                tracing::error!("Failed to retrieve page at offset {} - {}", offset, e);
                fetched.pages_failed += 1;
            }
        }
        bar.inc(1);

        if let Some(delay) = delay {
            sleep(delay).await;
        }
    }

    bar.finish_and_clear();

    sort_by_published(&mut fetched.posts);
    fetched
}

/// Stable sort by publish timestamp, oldest first.
///
/// ISO-8601 strings in one format compare chronologically as plain strings.
pub fn sort_by_published(posts: &mut [Post]) {
    posts.sort_by(|a, b| a.published_key().cmp(b.published_key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, published: Option<&str>) -> Post {
        Post {
            id: Some(id.into()),
            published: published.map(String::from),
            ..Post::default()
        }
    }

    #[test]
    fn test_page_offsets() {
        assert_eq!(page_offsets(0, 120, 50), vec![0, 50, 100]);
        assert_eq!(page_offsets(0, 100, 50), vec![0, 50]);
        assert_eq!(page_offsets(100, 120, 50), vec![100]);
        assert!(page_offsets(0, 0, 50).is_empty());
        assert!(page_offsets(150, 100, 50).is_empty());
        assert!(page_offsets(0, 100, 0).is_empty());
    }

    #[test]
    fn test_sort_by_published() {
        let mut posts = vec![
            post("c", Some("2021-03-01T00:00:00")),
            post("a", Some("2021-01-01T00:00:00")),
            post("none", None),
            post("b1", Some("2021-02-01T00:00:00")),
            post("b2", Some("2021-02-01T00:00:00")),
        ];
        sort_by_published(&mut posts);

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["none", "a", "b1", "b2", "c"]);
        assert!(posts
            .windows(2)
            .all(|w| w[0].published_key() <= w[1].published_key()));
    }
}
