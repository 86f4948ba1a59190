//! Host status relay
//!
//! Builds a status record from local host metrics, forwards it to a storage
//! service, asks a peer service for its own status, and relays the stored
//! history back as plain text.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod transport;

pub use config::Config;
pub use errors::{RelayError, Result};
pub use models::StatusRecord;
pub use state::AppState;
