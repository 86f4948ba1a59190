//! Configuration management for the status relay

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration. Every option can be given as a flag or through
/// the environment variable named next to it.
#[derive(Debug, Clone, Parser)]
#[command(name = "status-relay", version, about = "Host status relay service")]
pub struct Config {
    /// Name reported in every status record
    #[arg(long, env = "SERVICE_NAME", default_value = "Service1")]
    pub service_name: String,

    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Base URL of the storage service
    #[arg(long, env = "STORAGE_URL", default_value = "http://storage:6000")]
    pub storage_url: String,

    /// Base URL of the peer service; `none` disables the peer call
    #[arg(long, env = "PEER_URL", default_value = "http://service2:5000")]
    pub peer_url: String,

    /// Timeout applied to every outbound request
    #[arg(long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = 5)]
    pub http_timeout_seconds: u64,

    /// Mount point whose free space is reported
    #[arg(long, env = "DISK_MOUNT", default_value = "/")]
    pub disk_mount: PathBuf,

    /// Optional local file every status line is appended to
    #[arg(long, env = "LOCAL_LOG_PATH")]
    pub local_log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "Service1".to_string(),
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            storage_url: "http://storage:6000".to_string(),
            peer_url: "http://service2:5000".to_string(),
            http_timeout_seconds: 5,
            disk_mount: PathBuf::from("/"),
            local_log_path: None,
        }
    }
}

impl Config {
    /// Load configuration from command line flags and environment variables
    pub fn load() -> Self {
        Config::parse()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Storage base URL without a trailing slash
    pub fn storage_base(&self) -> String {
        self.storage_url.trim_end_matches('/').to_string()
    }

    /// Peer base URL, or `None` when the peer call is disabled
    pub fn peer_base(&self) -> Option<String> {
        let peer = self.peer_url.trim();
        if peer.is_empty() || peer.eq_ignore_ascii_case("none") {
            return None;
        }
        Some(peer.trim_end_matches('/').to_string())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.service_name.trim().is_empty() {
            return Err("service_name cannot be empty".to_string());
        }

        if self.storage_url.trim().is_empty() {
            return Err("storage_url cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.http_timeout_seconds == 0 {
            return Err("http_timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}
