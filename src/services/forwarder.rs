use tracing::{error, info, warn};

use crate::errors::Result;
use crate::state::AppState;

/// Build the local record, hand it to storage, then ask the peer for its own
/// status. Only a failure to read local metrics is returned as an error;
/// storage and peer failures are logged and skipped.
pub async fn report_status(state: &AppState) -> Result<String> {
    let record = state.reporter.snapshot()?;
    let local_text = record.to_text();
    info!("Built status record for {}", record.service);

    if let Err(e) = state.transport.post_record(&record).await {
        error!("Failed to send record to storage: {}", e);
    }

    if let Some(local_log) = &state.local_log {
        if let Err(e) = local_log.append(&local_text).await {
            warn!(
                "Failed to append to local log {}: {}",
                local_log.path().display(),
                e
            );
        }
    }

    let peer_text = match state.transport.fetch_peer_status().await {
        Ok(text) => text.unwrap_or_default(),
        Err(e) => {
            error!("Failed to reach peer service: {}", e);
            String::new()
        }
    };

    Ok(combine(local_text, &peer_text))
}

fn combine(local_text: String, peer_text: &str) -> String {
    if peer_text.is_empty() {
        local_text
    } else {
        format!("{}\n{}", local_text, peer_text)
    }
}
