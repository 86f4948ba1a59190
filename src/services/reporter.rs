use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use sysinfo::{Disks, System};
use tracing::debug;

use crate::errors::{RelayError, Result};
use crate::models::StatusRecord;

/// Source of the host readings a status record is built from
pub trait HostMetrics: Send + Sync {
    /// Seconds since the host booted
    fn uptime_seconds(&self) -> Result<u64>;

    /// Bytes available on the monitored filesystem
    fn free_disk_bytes(&self) -> Result<u64>;
}

/// Live readings from the operating system
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    mount: PathBuf,
}

impl SystemMetrics {
    pub fn new(mount: impl Into<PathBuf>) -> Self {
        Self { mount: mount.into() }
    }
}

impl HostMetrics for SystemMetrics {
    fn uptime_seconds(&self) -> Result<u64> {
        Ok(System::uptime())
    }

    fn free_disk_bytes(&self) -> Result<u64> {
        let disks = Disks::new_with_refreshed_list();

        // The deepest mount point containing the monitored path owns it.
        let disk = disks
            .list()
            .iter()
            .filter(|disk| self.mount.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().components().count())
            .ok_or_else(|| {
                RelayError::Metrics(format!(
                    "no filesystem found for {}",
                    self.mount.display()
                ))
            })?;

        debug!(
            "Reading free space of {} from {}",
            self.mount.display(),
            disk.mount_point().display()
        );

        Ok(disk.available_space())
    }
}

/// Builds fresh status records for this service
#[derive(Clone)]
pub struct StatusReporter {
    service_name: String,
    metrics: Arc<dyn HostMetrics>,
}

impl StatusReporter {
    pub fn new(service_name: String, metrics: Arc<dyn HostMetrics>) -> Self {
        Self {
            service_name,
            metrics,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Take a snapshot now
    pub fn snapshot(&self) -> Result<StatusRecord> {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, at: DateTime<Utc>) -> Result<StatusRecord> {
        let uptime_seconds = self.metrics.uptime_seconds()?;
        let free_bytes = self.metrics.free_disk_bytes()?;

        Ok(StatusRecord::new(
            &self.service_name,
            at,
            uptime_seconds,
            free_bytes,
        ))
    }
}

impl std::fmt::Debug for StatusReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusReporter")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}

/// Fixed readings, used where live host data is not wanted
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub uptime_seconds: u64,
    pub free_bytes: u64,
}

impl HostMetrics for FixedMetrics {
    fn uptime_seconds(&self) -> Result<u64> {
        Ok(self.uptime_seconds)
    }

    fn free_disk_bytes(&self) -> Result<u64> {
        Ok(self.free_bytes)
    }
}
