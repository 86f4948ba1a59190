//! Error types for the status relay

use std::fmt;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Debug)]
pub enum RelayError {
    /// IO operation failed
    Io(std::io::Error),

    /// HTTP request failed
    Http(reqwest::Error),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Host metrics could not be read
    Metrics(String),

    /// Collaborator answered with an unexpected status
    Upstream { status: u16, body: String },

    /// Transport error (timeouts and the like)
    Transport(String),
}

impl RelayError {
    /// Status code reported by a collaborator, if this error carries one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Io(err) => write!(f, "IO error: {}", err),
            RelayError::Http(err) => write!(f, "HTTP error: {}", err),
            RelayError::Json(err) => write!(f, "JSON error: {}", err),
            RelayError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RelayError::Metrics(msg) => write!(f, "Host metrics error: {}", msg),
            RelayError::Upstream { status, body } => {
                write!(f, "Upstream responded {}: {}", status, body)
            }
            RelayError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Io(err) => Some(err),
            RelayError::Http(err) => Some(err),
            RelayError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::Io(err)
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Http(err)
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Json(err)
    }
}
