/// Configuration model - read once at cold start, immutable afterwards
use crate::constants::{
    ARCHIVE_SCHEME, ENV_BUCKET_NAME, ENV_MAIL_RECIPIENT, ENV_MAIL_SENDER, ENV_REGION,
};
use crate::error::RelayError;
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};

/// Process-wide relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    /// AWS region for the S3 and SES clients
    pub region: String,
    /// Bucket holding the raw messages written by the SES receipt rule
    pub bucket_name: String,
    /// Source address of forwarded messages (must be a verified SES identity)
    pub mail_sender: String,
    /// Fixed destination of every forwarded message
    pub mail_recipient: String,
}

impl RelayConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| RelayError::Config(format!("Missing {} env var", name)))
        };

        let config = Self {
            region: required(ENV_REGION)?,
            bucket_name: required(ENV_BUCKET_NAME)?,
            mail_sender: required(ENV_MAIL_SENDER)?,
            mail_recipient: required(ENV_MAIL_RECIPIENT)?,
        };

        config
            .validate()
            .map_err(|e| RelayError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            region = %config.region,
            bucket = %config.bucket_name,
            "Configuration validated successfully"
        );

        Ok(config)
    }

    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if self.region.is_empty() {
            return Err("Region not configured".to_string());
        }

        if self.bucket_name.is_empty() {
            return Err("Bucket name not configured".to_string());
        }

        self.sender_mailbox()
            .map_err(|e| format!("{}: {}", ENV_MAIL_SENDER, e.reason()))?;
        self.recipient_mailbox()
            .map_err(|e| format!("{}: {}", ENV_MAIL_RECIPIENT, e.reason()))?;

        Ok(())
    }

    pub fn sender_mailbox(&self) -> Result<Mailbox, RelayError> {
        parse_mailbox(&self.mail_sender)
    }

    pub fn recipient_mailbox(&self) -> Result<Mailbox, RelayError> {
        parse_mailbox(&self.mail_recipient)
    }

    /// Locator of a stored raw message, e.g. `s3://bucket/message-id`
    pub fn archive_path(&self, message_id: &str) -> String {
        format!("{}{}/{}", ARCHIVE_SCHEME, self.bucket_name, message_id)
    }
}

fn parse_mailbox(value: &str) -> Result<Mailbox, RelayError> {
    value
        .parse::<Mailbox>()
        .map_err(|e| RelayError::Config(format!("Invalid email address '{}': {}", value, e)))
}
