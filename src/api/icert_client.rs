use anyhow::{anyhow, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::{Config, FiscalYear};

use super::{counter_query, CountProvider};

/// HTTP client for the iCERT labor certification registry counter endpoint.
///
/// The endpoint answers each filtered search with a plain-text integer
/// body (the number of matching applications), not JSON.
pub struct IcertClient {
    client: Client,
    base_url: String,
}

impl IcertClient {
    /// Create a new iCERT client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent("lcr-stats/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Issue one counter request and parse the integer body
    async fn fetch_count(&self, params: &[(&'static str, String)]) -> Result<u64> {
        debug!("Requesting count from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "iCERT request failed with status {}",
                response.status()
            ));
        }

        let body = response.text().await?;
        let trimmed = body.trim();

        trimmed
            .parse::<u64>()
            .map_err(|_| anyhow!("iCERT returned a non-integer count body: {:?}", trimmed))
    }
}

#[async_trait::async_trait]
impl CountProvider for IcertClient {
    async fn fiscal_year_count(
        &self,
        year: FiscalYear,
        state_id: Option<u32>,
        experience_only: bool,
    ) -> Result<u64> {
        let params = counter_query(year, state_id, experience_only);
        let count = self.fetch_count(&params).await?;

        debug!(
            "FY{} state={:?} experience_only={} -> {}",
            year.0, state_id, experience_only, count
        );
        Ok(count)
    }
}
