use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Display;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Snapshot of a host's uptime and free disk space, in the shape storage
/// accepts on `POST /log`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatusRecord {
    pub service: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub free_mb: u64,
}

impl StatusRecord {
    pub fn new(service: &str, at: DateTime<Utc>, uptime_seconds: u64, free_bytes: u64) -> Self {
        Self {
            service: service.to_string(),
            timestamp: format_timestamp(at),
            uptime_seconds,
            free_mb: bytes_to_mb(free_bytes),
        }
    }

    /// Uptime in hours, rounded to 2 decimals
    pub fn uptime_hours(&self) -> f64 {
        round_to_hundredths(self.uptime_seconds as f64 / SECONDS_PER_HOUR)
    }

    /// Human readable line returned to callers
    pub fn to_text(&self) -> String {
        render_line(&self.service, &self.timestamp, self.uptime_hours(), self.free_mb)
    }
}

/// An entry as storage hands it back from `GET /log`.
///
/// Storage is not trusted to be well formed: any field may be missing, and
/// the numbers are kept as JSON numbers so floats and negatives still render.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogEntry {
    #[serde(default = "unknown_service")]
    pub service: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default = "zero")]
    pub uptime_seconds: Number,
    #[serde(default = "zero")]
    pub free_mb: Number,
}

fn unknown_service() -> String {
    "Unknown".to_string()
}

fn zero() -> Number {
    Number::from(0)
}

impl LogEntry {
    pub fn uptime_hours(&self) -> f64 {
        let seconds = self.uptime_seconds.as_f64().unwrap_or_default();
        round_to_hundredths(seconds / SECONDS_PER_HOUR)
    }

    pub fn to_text(&self) -> String {
        render_line(&self.service, &self.timestamp, self.uptime_hours(), &self.free_mb)
    }
}

fn render_line(service: &str, timestamp: &str, hours: f64, free_mb: impl Display) -> String {
    format!(
        "{}@{}: uptime {} hours, free disk in root: {} MBytes",
        service,
        timestamp,
        format_hours(hours),
        free_mb
    )
}

/// ISO-8601 UTC with second precision, e.g. `2024-01-01T00:00:00Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn bytes_to_mb(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_MB).round() as u64
}

// Rounds the exact binary value, ties to even. 54 s is 0.01499.. hours and
// becomes 0.01; 450 s is exactly 0.125 and becomes 0.12.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

// Whole hours keep one fractional digit ("1.0"), everything else uses the
// shortest representation ("1.5", "12.34").
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_text_line_format() {
        let record = StatusRecord::new("Service1", at_new_year(), 3600, 500 * 1024 * 1024);

        assert_eq!(record.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(record.free_mb, 500);
        assert_eq!(
            record.to_text(),
            "Service1@2024-01-01T00:00:00Z: uptime 1.0 hours, free disk in root: 500 MBytes"
        );
    }

    #[test]
    fn test_uptime_rounding() {
        let mut record = StatusRecord::new("Service1", at_new_year(), 5400, 0);
        assert_eq!(format_hours(record.uptime_hours()), "1.5");

        record.uptime_seconds = 1234;
        assert_eq!(record.uptime_hours(), 0.34);
        assert_eq!(format_hours(record.uptime_hours()), "0.34");

        record.uptime_seconds = 0;
        assert_eq!(format_hours(record.uptime_hours()), "0.0");

        record.uptime_seconds = 44_424;
        assert_eq!(format_hours(record.uptime_hours()), "12.34");
    }

    #[test]
    fn test_free_space_rounds_to_nearest_mb() {
        assert_eq!(bytes_to_mb(0), 0);
        assert_eq!(bytes_to_mb(1024 * 1024 + 512 * 1024), 2);
        assert_eq!(bytes_to_mb(1024 * 1024 + 511 * 1024), 1);
    }

    #[test]
    fn test_rounding_follows_binary_value_and_ties_to_even() {
        let mut record = StatusRecord::new("Service1", at_new_year(), 54, 0);
        assert_eq!(format_hours(record.uptime_hours()), "0.01");

        record.uptime_seconds = 450;
        assert_eq!(format_hours(record.uptime_hours()), "0.12");

        record.uptime_seconds = 90;
        assert_eq!(format_hours(record.uptime_hours()), "0.03");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let entry: LogEntry = serde_json::from_str("{}").unwrap();

        assert_eq!(entry.service, "Unknown");
        assert_eq!(entry.timestamp, "");
        assert_eq!(
            entry.to_text(),
            "Unknown@: uptime 0.0 hours, free disk in root: 0 MBytes"
        );
    }

    #[test]
    fn test_entry_with_float_and_negative_numbers() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"service":"Service1","timestamp":"t","uptime_seconds":5400.0,"free_mb":500.0}"#,
        )
        .unwrap();
        assert_eq!(
            entry.to_text(),
            "Service1@t: uptime 1.5 hours, free disk in root: 500.0 MBytes"
        );

        let entry: LogEntry =
            serde_json::from_str(r#"{"service":"Service1","uptime_seconds":-3600,"free_mb":-1}"#)
                .unwrap();
        assert_eq!(
            entry.to_text(),
            "Service1@: uptime -1.0 hours, free disk in root: -1 MBytes"
        );
    }

    #[test]
    fn test_entry_matches_record_rendering() {
        let record = StatusRecord::new("Service1", at_new_year(), 3600, 500 * 1024 * 1024);
        let entry: LogEntry = serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();

        assert_eq!(entry.to_text(), record.to_text());
    }

    #[test]
    fn test_serializes_storage_shape() {
        let record = StatusRecord::new("Service2", at_new_year(), 42, 0);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "service": "Service2",
                "timestamp": "2024-01-01T00:00:00Z",
                "uptime_seconds": 42,
                "free_mb": 0
            })
        );
    }
}
