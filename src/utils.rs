use std::path::PathBuf;

use anyhow::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tokio::fs;
use tracing::info;

/// Persist the raw inbound event body verbatim to a timestamped file.
///
/// Audit trail only; nothing reads these files later. Callers treat a
/// failure here as non-fatal for the request.
pub async fn log_raw_event(log_dir: &str, event: &Value) -> Result<PathBuf, Error> {
    fs::create_dir_all(log_dir).await?;

    let timestamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    let log_file = PathBuf::from(log_dir).join(format!("webhook_data_{timestamp}.json"));

    fs::write(&log_file, serde_json::to_vec_pretty(event)?).await?;

    info!(path = %log_file.display(), "Incoming event logged");

    Ok(log_file)
}
