/// SES receipt event delivered to the Lambda function
use crate::error::RelayError;
use serde::Deserialize;

/// SES event from direct Lambda invocation
#[derive(Debug, Clone, Deserialize)]
pub struct SesEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SesEventRecord>,
}

impl SesEvent {
    /// Message ID of the first record, which is also the S3 object key
    pub fn message_id(&self) -> Result<&str, RelayError> {
        self.records
            .first()
            .map(|record| record.ses.mail.message_id.as_str())
            .ok_or_else(|| RelayError::Event("SES event contains no records".to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SesEventRecord {
    pub ses: SesPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SesPayload {
    pub mail: SesMail,
}

/// Only the message ID is read; it names the stored object
#[derive(Debug, Clone, Deserialize)]
pub struct SesMail {
    #[serde(rename = "messageId")]
    pub message_id: String,
}
