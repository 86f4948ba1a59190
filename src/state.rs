use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::services::local_log::LocalLog;
use crate::services::reporter::{HostMetrics, StatusReporter, SystemMetrics};
use crate::transport::HttpTransport;

// App state
#[derive(Debug, Clone)]
pub struct AppState {
    pub reporter: StatusReporter,
    pub transport: HttpTransport,
    pub local_log: Option<LocalLog>,
}

impl AppState {
    /// State backed by live host readings
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_metrics(config, Arc::new(SystemMetrics::new(&config.disk_mount)))
    }

    pub fn with_metrics(config: &Config, metrics: Arc<dyn HostMetrics>) -> Result<Self> {
        let transport = HttpTransport::new(
            config.storage_base(),
            config.peer_base(),
            config.http_timeout(),
        )?;

        Ok(Self {
            reporter: StatusReporter::new(config.service_name.clone(), metrics),
            transport,
            local_log: config.local_log_path.as_ref().map(LocalLog::new),
        })
    }
}
