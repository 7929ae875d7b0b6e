/// Mailrelay Worker - SES forwarding Lambda
///
/// This module contains the invocation handler and its cold-start context.
pub mod context;
pub mod handlers;

// Re-export commonly used items
pub use context::RelayContext;
pub use handlers::handler;
pub use mailrelay_core::*;
