use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::{config::Config, models::match_detail::MatchDetail};

pub struct FaceitClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl FaceitClient {
    pub fn new(config: &Config) -> Self {
        info!(base_url = %config.faceit_api_base_url, "FACEIT client initialized");

        Self {
            http_client: Client::new(),
            base_url: config.faceit_api_base_url.clone(),
            api_key: config.faceit_api_key.clone(),
        }
    }

    /// Fetch the authoritative match detail for one match identifier.
    /// Single attempt, no caching.
    pub async fn fetch_match(&self, match_id: &str) -> Result<MatchDetail, Error> {
        let url = format!("{}/data/v4/matches/{}", self.base_url, match_id);

        debug!(match_id, "Fetching match detail from FACEIT");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                match_id,
                status = %status,
                body = %body,
                "FACEIT match request failed"
            );
            return Err(anyhow!("FACEIT API returned status {}", status));
        }

        let detail = response
            .json::<MatchDetail>()
            .await
            .map_err(|e| anyhow!("Failed to parse match detail JSON: {}", e))?;

        Ok(detail)
    }
}
