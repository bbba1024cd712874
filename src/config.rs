use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub faceit_api_key: String,
    pub discord_webhook_url: String,

    #[serde(default = "default_faceit_api_base_url")]
    pub faceit_api_base_url: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default = "default_security_header_value")]
    pub security_header_value: String,

    #[serde(default = "default_security_query_value")]
    pub security_query_value: String,

    #[serde(default = "default_event_log_dir")]
    pub event_log_dir: String,
}

fn default_faceit_api_base_url() -> String {
    "https://open.faceit.com".to_string()
}

fn default_server_port() -> u16 {
    3005
}

fn default_security_header_value() -> String {
    "your-secure-header".to_string()
}

fn default_security_query_value() -> String {
    "your-secure-value".to_string()
}

fn default_event_log_dir() -> String {
    "logs".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
