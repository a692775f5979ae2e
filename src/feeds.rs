//! Feed aggregation: pull the four fixed category feed lists and trim them.
//!
//! A feed that fails to fetch or parse contributes zero items; the failure is
//! logged and aggregation continues with the remaining feeds in the category.

use std::path::Path;
use std::time::Duration;

use feed_rs::parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How many entries to pull from a single feed before trimming the combined
/// category list to its limit.
const PER_FEED_CAP: usize = 10;

/// The four fixed news groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    GlobalEnterpriseTech,
    WorldPolitics,
    IndianPolitics,
    BusinessMarket,
}

impl Category {
    /// Field name used in the aggregator output and the final report.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::GlobalEnterpriseTech => "global_enterprise_tech",
            Category::WorldPolitics => "world_politics",
            Category::IndianPolitics => "indian_politics",
            Category::BusinessMarket => "business_market",
        }
    }

    /// Fixed source feeds for this category.
    pub fn feed_urls(&self) -> &'static [&'static str] {
        match self {
            Category::GlobalEnterpriseTech => &[
                "https://www.techmeme.com/feed.xml",
                "https://feeds.arstechnica.com/arstechnica/technology-lab",
                "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml",
            ],
            Category::WorldPolitics => &[
                "https://rss.nytimes.com/services/xml/rss/nyt/World.xml",
                "https://feeds.bbci.co.uk/news/world/rss.xml",
            ],
            Category::IndianPolitics => &[
                "https://feeds.bbci.co.uk/news/world/asia/india/rss.xml",
                "https://www.thehindu.com/news/national/feeder/default.rss",
            ],
            Category::BusinessMarket => &[
                "https://feeds.bbci.co.uk/news/business/rss.xml",
                "https://www.livemint.com/rss/companies",
                "https://www.moneycontrol.com/rss/latestnews.xml",
            ],
        }
    }

    /// Maximum number of items this category contributes to the digest.
    pub fn limit(&self) -> usize {
        match self {
            Category::GlobalEnterpriseTech => 3,
            Category::WorldPolitics => 3,
            Category::IndianPolitics => 2,
            Category::BusinessMarket => 2,
        }
    }
}

/// A single news entry as produced from a raw feed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub published: String,
    /// URL of the feed the entry came from.
    pub source: String,
}

/// Aggregator output, keyed the way the curation prompt expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopNews {
    pub global_enterprise_tech: Vec<NewsItem>,
    pub world_politics: Vec<NewsItem>,
    pub indian_politics: Vec<NewsItem>,
    pub business_market: Vec<NewsItem>,
}

/// Fetches the fixed category feeds sequentially and trims the results.
pub struct FeedAggregator {
    client: reqwest::Client,
}

impl FeedAggregator {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the HTTP client used for feed fetches.
    pub fn http_client() -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent("news-digest/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
    }

    /// Fetch every category list. Never fails: a broken feed just
    /// contributes nothing.
    pub async fn fetch_top_news(&self) -> TopNews {
        TopNews {
            global_enterprise_tech: self.pull_category(Category::GlobalEnterpriseTech).await,
            world_politics: self.pull_category(Category::WorldPolitics).await,
            indian_politics: self.pull_category(Category::IndianPolitics).await,
            business_market: self.pull_category(Category::BusinessMarket).await,
        }
    }

    async fn pull_category(&self, category: Category) -> Vec<NewsItem> {
        let items = self.pull(category.feed_urls(), category.limit()).await;
        debug!(
            category = category.wire_name(),
            count = items.len(),
            "category aggregated"
        );
        items
    }

    /// Pull up to `PER_FEED_CAP` entries from each feed, then trim the
    /// combined list to `limit`.
    async fn pull(&self, feed_urls: &[&str], limit: usize) -> Vec<NewsItem> {
        let mut items = Vec::new();
        for url in feed_urls.iter().copied() {
            match self.fetch_feed(url).await {
                Ok(mut parsed) => items.append(&mut parsed),
                Err(err) => warn!(feed = url, error = %err, "skipping feed"),
            }
        }
        items.truncate(limit);
        items
    }

    /// Fetch and parse a single feed. A URL naming a local file is read from
    /// disk instead of fetched over HTTP.
    async fn fetch_feed(&self, url: &str) -> anyhow::Result<Vec<NewsItem>> {
        let bytes = if Path::new(url).is_file() {
            std::fs::read(url)?
        } else {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec()
        };
        parse_feed_items(&bytes, url)
    }
}

/// Map raw feed entries to `NewsItem`s, capped at `PER_FEED_CAP` per feed.
fn parse_feed_items(bytes: &[u8], source: &str) -> anyhow::Result<Vec<NewsItem>> {
    let feed = parser::parse(bytes)?;

    let items = feed
        .entries
        .into_iter()
        .take(PER_FEED_CAP)
        .map(|entry| {
            let link = entry
                .links
                .iter()
                .find(|l| l.rel.as_deref().unwrap_or("") == "alternate")
                .or_else(|| entry.links.first())
                .map(|l| l.href.clone())
                .unwrap_or_default();

            NewsItem {
                title: entry.title.map(|t| t.content).unwrap_or_default(),
                summary: entry.summary.map(|t| t.content).unwrap_or_default(),
                link,
                published: entry.published.map(|d| d.to_rfc2822()).unwrap_or_default(),
                source: source.to_string(),
            }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rss_fixture(entry_count: usize) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel><title>Fixture</title>",
        );
        for i in 0..entry_count {
            xml.push_str(&format!(
                "<item><title>Story {i}</title>\
                 <link>https://example.com/story/{i}</link>\
                 <description>Summary {i}</description>\
                 <pubDate>Mon, 04 Aug 2025 12:00:00 GMT</pubDate></item>"
            ));
        }
        xml.push_str("</channel></rss>");
        xml
    }

    fn write_feed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn aggregator() -> FeedAggregator {
        FeedAggregator::new(FeedAggregator::http_client().unwrap())
    }

    #[test]
    fn parse_caps_entries_per_feed() {
        let xml = rss_fixture(15);
        let items = parse_feed_items(xml.as_bytes(), "fixture").unwrap();
        assert_eq!(items.len(), PER_FEED_CAP);
    }

    #[test]
    fn parse_maps_entry_fields() {
        let xml = rss_fixture(1);
        let items = parse_feed_items(xml.as_bytes(), "https://feeds.example.com/a").unwrap();
        assert_eq!(items[0].title, "Story 0");
        assert_eq!(items[0].link, "https://example.com/story/0");
        assert_eq!(items[0].summary, "Summary 0");
        assert_eq!(items[0].source, "https://feeds.example.com/a");
        assert!(!items[0].published.is_empty());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_feed_items(b"this is not a feed", "fixture").is_err());
    }

    #[tokio::test]
    async fn pull_never_exceeds_limit() {
        let a = write_feed_file(&rss_fixture(4));
        let b = write_feed_file(&rss_fixture(4));
        let urls = [
            a.path().to_str().unwrap().to_string(),
            b.path().to_str().unwrap().to_string(),
        ];
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

        let items = aggregator().pull(&url_refs, 3).await;
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn broken_feed_does_not_abort_category() {
        let broken = write_feed_file("<<< definitely not xml >>>");
        let good = write_feed_file(&rss_fixture(2));
        let urls = [
            broken.path().to_str().unwrap().to_string(),
            good.path().to_str().unwrap().to_string(),
        ];
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

        let items = aggregator().pull(&url_refs, 3).await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.title.starts_with("Story")));
    }

    #[test]
    fn category_limits_match_digest_layout() {
        assert_eq!(Category::GlobalEnterpriseTech.limit(), 3);
        assert_eq!(Category::WorldPolitics.limit(), 3);
        assert_eq!(Category::IndianPolitics.limit(), 2);
        assert_eq!(Category::BusinessMarket.limit(), 2);
    }
}
