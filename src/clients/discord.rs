use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::{config::Config, models::embed::DiscordMessage};

pub struct DiscordClient {
    http_client: Client,
    webhook_url: String,
}

impl DiscordClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            webhook_url: config.discord_webhook_url.clone(),
        }
    }

    /// Post one message to the configured webhook. Single attempt; a
    /// failure discards the message.
    pub async fn send_message(&self, message: &DiscordMessage) -> Result<(), Error> {
        debug!(embeds = message.embeds.len(), "Posting message to Discord webhook");

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            info!("Message sent to Discord");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Discord webhook request failed");
            Err(anyhow!("Discord webhook returned status {}", status))
        }
    }
}
