/// Mailrelay Core - Shared library for the Mailrelay forwarding Lambda
///
/// This crate contains the configuration, event types, MIME repackaging and
/// AWS service wrappers used by the Mailrelay worker.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
