//! Creator profile page scraping.
//!
//! The profile page has no stable IDs or classes for the values we need, so
//! lookups follow fixed element paths. They live here so markup changes only
//! break this file.

use scraper::{ElementRef, Html, Selector};

/// `/html/body/div[2]/main/section/div[1]/small`, holds "Showing X - Y of N".
const POST_COUNT_PATH: &str =
    "html > body > div:nth-of-type(2) > main > section > div:nth-of-type(1) > small";

/// `/html/body/div[2]/main/section/div[3]/div[2]`, one child per post card.
const POST_LIST_PATH: &str =
    "html > body > div:nth-of-type(2) > main > section > div:nth-of-type(3) > div:nth-of-type(2)";

/// `/html/body/div[2]/main/section/header/div[2]/h1/a/span[2]`
const DISPLAY_NAME_PATH: &str = "html > body > div:nth-of-type(2) > main > section > header \
     > div:nth-of-type(2) > h1 > a > span:nth-of-type(2)";

/// A parsed creator profile page.
pub struct ProfilePage {
    document: Html,
}

impl ProfilePage {
    /// Parse a profile page from its HTML.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Total post count from the "Showing X - Y of N" banner.
    ///
    /// Falls back to counting post cards when the banner is missing, which
    /// happens when the creator only has a single page of posts.
    pub fn post_count(&self) -> Option<u64> {
        if let Some(total) = self.showing_total() {
            return Some(total);
        }

        let count = self.post_card_count()?;
        tracing::info!("Creator only has one page of posts");
        Some(count)
    }

    /// Creator display name as shown in the profile header.
    pub fn display_name(&self) -> Option<String> {
        let element = self.first(DISPLAY_NAME_PATH)?;
        Some(element_text(element))
    }

    fn showing_total(&self) -> Option<u64> {
        let selector = Selector::parse(POST_COUNT_PATH).ok()?;

        self.document
            .select(&selector)
            .map(element_text)
            .filter(|text| text.contains("Showing"))
            .find_map(|text| {
                let (_, total) = text.split_once("of")?;
                total.trim().parse().ok()
            })
    }

    fn post_card_count(&self) -> Option<u64> {
        let container = self.first(POST_LIST_PATH)?;
        let count = container
            .children()
            .filter(|node| node.value().is_element())
            .count();
        Some(count as u64)
    }

    fn first(&self, path: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(path).ok()?;
        self.document.select(&selector).next()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
