use crate::{constants::ALL_WEEK_FEED_URL, data::feed::EarthquakeFeed, Result};

/// Asynchronous client for the USGS summary feed. One fetch per mount;
/// transport and decode failures surface as typed errors rather than
/// being swallowed.
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Client for the fixed all-week feed.
    pub fn new() -> Self {
        Self::with_url(ALL_WEEK_FEED_URL)
    }

    /// Client for an alternate feed endpoint (tests, other windows).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues the GET and decodes the feature collection.
    pub async fn fetch(&self) -> Result<EarthquakeFeed> {
        log::debug!("fetching earthquake feed from {}", self.url);

        let feed = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<EarthquakeFeed>()
            .await?;

        log::info!("feed delivered {} features", feed.len());
        Ok(feed)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
