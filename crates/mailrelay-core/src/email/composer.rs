/// Forwarding envelope composer using lettre crate
use crate::constants::ATTACHED_MESSAGE_CONTENT_TYPE;
use crate::email::attachment::attachment_filename;
use crate::email::parser::HeaderSet;
use crate::error::RelayError;
use crate::models::{OutboundMessage, RelayConfig};
use crate::utils::logging::{redact_email, redact_subject};
use lettre::message::header::{ContentDisposition, ContentTransferEncoding, ContentType};
use lettre::message::{Message, MultiPart, SinglePart};

/// Repackages a raw inbound message as a forwarded message
///
/// The outbound message is `multipart/mixed`: a plain-text summary of the
/// original headers, then the original itself as a base64 `message/rfc822`
/// attachment. The attachment carries the raw bytes as received, so nothing
/// the header parser misreads can alter the forwarded copy.
pub struct ForwardingComposer<'a> {
    config: &'a RelayConfig,
}

impl<'a> ForwardingComposer<'a> {
    pub fn new(config: &'a RelayConfig) -> Self {
        Self { config }
    }

    pub fn compose(
        &self,
        message_id: &str,
        raw_email: &[u8],
    ) -> Result<OutboundMessage, RelayError> {
        let headers = HeaderSet::parse(raw_email)?;
        tracing::info!(
            "Parsed original - from: {}, subject: {}, size: {} bytes",
            redact_email(&headers.from_line()),
            redact_subject(headers.subject()),
            raw_email.len()
        );

        let summary = headers.summary(&self.config.archive_path(message_id));
        let filename = attachment_filename(headers.subject());

        let content_type = ContentType::parse(ATTACHED_MESSAGE_CONTENT_TYPE).map_err(|e| {
            RelayError::Composition(format!(
                "Invalid content type '{}': {}",
                ATTACHED_MESSAGE_CONTENT_TYPE, e
            ))
        })?;

        let original = SinglePart::builder()
            .header(content_type)
            .header(ContentDisposition::attachment(&filename))
            .header(ContentTransferEncoding::Base64)
            .body(raw_email.to_vec());

        let message = Message::builder()
            .from(self.config.sender_mailbox()?)
            .to(self.config.recipient_mailbox()?)
            .subject(headers.subject())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(summary.clone()))
                    .singlepart(original),
            )
            .map_err(|e| {
                RelayError::Composition(format!("Failed to build forwarding message: {}", e))
            })?;

        let raw = message.formatted();

        tracing::debug!(
            message_id = %message_id,
            attachment = %filename,
            size = raw.len(),
            "Composed forwarding message"
        );

        Ok(OutboundMessage {
            source: self.config.mail_sender.clone(),
            destinations: vec![self.config.mail_recipient.clone()],
            summary,
            attachment_filename: filename,
            raw,
        })
    }
}
