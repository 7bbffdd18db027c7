use tracing::{debug, instrument};

use crate::error::{MatchdayError, Result};
use crate::model::{FixturesPage, UpstreamFixture};

/// Client for the upstream fixtures feed.
///
/// Wraps a [`reqwest::Client`] and exposes typed access to the
/// per-season fixtures endpoint the sync component consumes.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> matchday::Result<()> {
/// use matchday::UpstreamClient;
///
/// let client = UpstreamClient::new("https://api.example.com/v1");
/// let fixtures = client.fetch_fixtures(17, 61627).await?;
/// println!("Found {} fixtures", fixtures.len());
/// # Ok(())
/// # }
/// ```
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client with default HTTP settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: client,
            base_url,
        }
    }

    /// Fetch the upcoming fixtures for one tournament season.
    #[instrument(skip(self))]
    pub async fn fetch_fixtures(
        &self,
        tournament_id: u32,
        season_id: u32,
    ) -> Result<Vec<UpstreamFixture>> {
        let url = format!(
            "{}/unique-tournament/{tournament_id}/season/{season_id}/events/next/0",
            self.base_url
        );
        let page = self.get_json(&url).await?;
        debug!(tournament_id, season_id, fixtures = page.events.len(), "fetched fixtures page");
        Ok(page.events)
    }

    async fn get_json(&self, url: &str) -> Result<FixturesPage> {
        debug!(url, "fetching fixtures");

        let response = self.http.get(url).send().await.map_err(|e| MatchdayError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatchdayError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| MatchdayError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| MatchdayError::Decode {
            url: url.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_the_base_url() {
        let client = UpstreamClient::new("https://api.example.com/v1//");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }
}
