/// Data models for Mailrelay
pub mod config;
pub mod events;
pub mod messages;

// Re-export commonly used types
pub use config::*;
pub use events::*;
pub use messages::*;
