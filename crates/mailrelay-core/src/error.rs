/// Error types for Mailrelay
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid trigger event: {0}")]
    Event(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Email parsing error: {0}")]
    EmailParsing(String),

    #[error("Email composition error: {0}")]
    Composition(String),

    #[error("SES error: {0}")]
    Ses(String),
}

impl RelayError {
    /// Message without the variant prefix, as reported by the failing party
    pub fn reason(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::Event(msg)
            | Self::Storage(msg)
            | Self::EmailParsing(msg)
            | Self::Composition(msg)
            | Self::Ses(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Event(err.to_string())
    }
}
