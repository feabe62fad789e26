//! Kemono HTTP client.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::api::types::Post;
use crate::config::{ProfileRef, SiteConfig};
use crate::error::{Error, Result};

/// Client for the Kemono profile pages and listing API.
pub struct KemonoApi {
    client: Client,
    web_base: String,
    api_base: String,
}

impl KemonoApi {
    /// Create a new API client for the configured site.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&site.user_agent)
            .timeout(Duration::from_secs(site.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            web_base: site.web_base.trim_end_matches('/').to_string(),
            api_base: site.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a creator's HTML profile page.
    pub fn profile_url(&self, profile: &ProfileRef) -> String {
        format!(
            "{}/{}/user/{}",
            self.web_base, profile.service, profile.creator_id
        )
    }

    /// URL of one page of a creator's post listing.
    pub fn posts_url(&self, profile: &ProfileRef, offset: u64) -> String {
        format!(
            "{}/{}/user/{}?o={}",
            self.api_base, profile.service, profile.creator_id, offset
        )
    }

    /// Make a GET request, failing on anything but 200.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Fetch a creator's profile page HTML.
    pub async fn get_profile_page(&self, profile: &ProfileRef) -> Result<String> {
        let url = self.profile_url(profile);
        let response = self.get(&url).await?;
        Ok(response.text().await?)
    }

    /// Fetch one page of posts starting at `offset`.
    pub async fn get_posts(&self, profile: &ProfileRef, offset: u64) -> Result<Vec<Post>> {
        let url = self.posts_url(profile, offset);
        let response = self.get(&url).await?;
        let text = response.text().await?;
        tracing::debug!("Posts response length: {} bytes", text.len());

        let posts: Vec<Post> = serde_json::from_str(&text)?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileRef {
        ProfileRef {
            service: "patreon".into(),
            creator_id: 12345,
            page_offset: 0,
        }
    }

    #[test]
    fn test_urls() {
        let site = SiteConfig {
            web_base: "https://kemono.su/".into(),
            ..SiteConfig::default()
        };
        let api = KemonoApi::new(&site).unwrap();

        assert_eq!(
            api.profile_url(&profile()),
            "https://kemono.su/patreon/user/12345"
        );
        assert_eq!(
            api.posts_url(&profile(), 100),
            "https://kemono.su/api/v1/patreon/user/12345?o=100"
        );
    }
}
