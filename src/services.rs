pub mod forwarder;
pub mod local_log;
pub mod log_relay;
pub mod reporter;
