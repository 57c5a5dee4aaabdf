use anyhow::{Context, Result};

use crate::config;
use crate::domain::parse::parse_rows;
use crate::domain::row::RowStore;

/// Client for the published CSV feed. One fetch per page load; the store it
/// returns replaces any previous one wholesale.
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    csv_url: String,
}

impl Default for SheetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetClient {
    pub fn new() -> Self {
        Self::with_url(config::SHEET_CSV_URL)
    }

    pub fn with_url(csv_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            csv_url: csv_url.into(),
        }
    }

    /// GET the feed and parse it into a fresh store. A network error or
    /// non-2xx response is fatal for this load; there is no retry, the only
    /// recovery is running the load again.
    pub async fn fetch_rows(&self) -> Result<RowStore> {
        let response = self
            .http
            .get(&self.csv_url)
            .send()
            .await
            .context("failed to fetch sheet CSV")?
            .error_for_status()
            .context("sheet CSV request was rejected")?;
        let text = response.text().await.context("failed to read sheet CSV body")?;
        let store = RowStore::new(parse_rows(&text));
        tracing::info!(rows = store.len(), "loaded sheet");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_feed_is_a_fatal_error() {
        // Port 9 (discard) refuses connections; the load fails with a single
        // error and no retry.
        let client = SheetClient::with_url("http://127.0.0.1:9/");
        assert!(client.fetch_rows().await.is_err());
    }
}
