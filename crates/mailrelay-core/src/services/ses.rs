/// SES email sending service
use crate::constants::SENT_CONFIRMATION_PREFIX;
use crate::error::RelayError;
use crate::models::OutboundMessage;
use async_trait::async_trait;
use std::fmt;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Submits a serialized MIME document and returns the provider message ID
    async fn send_raw_email(
        &self,
        raw_email: &[u8],
        from: &str,
        to: &[String],
    ) -> Result<String, RelayError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_raw_email(
        &self,
        raw_email: &[u8],
        from: &str,
        to: &[String],
    ) -> Result<String, RelayError> {
        use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata};
        use aws_sdk_ses::primitives::Blob;

        let raw_message = aws_sdk_ses::types::RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| RelayError::Ses(format!("Failed to build raw message: {}", e)))?;

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(from)
            .set_destinations(Some(to.to_vec()))
            .send()
            .await
            .map_err(|e| {
                // Keep the provider's own wording; it is what gets logged
                let reason = e
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&e).to_string());
                RelayError::Ses(reason)
            })?;

        Ok(response.message_id)
    }
}

/// Result of handing a forwarding message to the mail service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { message_id: String },
    Failed { reason: String },
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

impl fmt::Display for SendOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent { message_id } => write!(f, "{}{}", SENT_CONFIRMATION_PREFIX, message_id),
            Self::Failed { reason } => f.write_str(reason),
        }
    }
}

/// Sends the forwarding message once
///
/// A rejected send is reported as [`SendOutcome::Failed`] instead of an error,
/// so the invocation completes and the upstream event is not redelivered.
pub async fn dispatch(sender: &dyn EmailSender, message: &OutboundMessage) -> SendOutcome {
    match sender
        .send_raw_email(&message.raw, &message.source, &message.destinations)
        .await
    {
        Ok(message_id) => {
            tracing::info!(
                message_id = %message_id,
                destinations = message.destinations.len(),
                "Sent forwarding message via SES"
            );
            SendOutcome::Sent { message_id }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to send forwarding message");
            SendOutcome::Failed {
                reason: e.reason().to_string(),
            }
        }
    }
}
