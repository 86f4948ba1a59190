use tracing::info;

use crate::errors::Result;
use crate::models::LogEntry;
use crate::transport::HttpTransport;

/// Fetch the stored history and render one line per entry
pub async fn formatted_log(transport: &HttpTransport) -> Result<String> {
    let entries = transport.fetch_log().await?;
    info!("Fetched {} log entries from storage", entries.len());

    Ok(format_entries(&entries))
}

/// Forward a clear request to storage
pub async fn clear_log(transport: &HttpTransport) -> Result<()> {
    transport.clear_log().await?;
    info!("Storage log cleared");

    Ok(())
}

pub fn format_entries(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(LogEntry::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entries() {
        let entries: Vec<LogEntry> = serde_json::from_str(
            r#"[
                {"service":"Service1","timestamp":"2024-01-01T00:00:00Z","uptime_seconds":3600,"free_mb":500},
                {"service":"Service2","timestamp":"2024-01-01T00:00:01Z","uptime_seconds":90,"free_mb":42}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            format_entries(&entries),
            "Service1@2024-01-01T00:00:00Z: uptime 1.0 hours, free disk in root: 500 MBytes\n\
             Service2@2024-01-01T00:00:01Z: uptime 0.03 hours, free disk in root: 42 MBytes"
        );
    }

    #[test]
    fn test_format_no_entries() {
        assert_eq!(format_entries(&[]), "");
    }
}
