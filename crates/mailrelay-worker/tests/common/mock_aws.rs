/// In-memory AWS services for integration testing
use async_trait::async_trait;
use mailrelay_worker::error::RelayError;
use mailrelay_worker::services::{EmailSender, StorageService};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock S3 bucket store
#[derive(Clone, Default)]
pub struct MockS3 {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub downloads: Arc<Mutex<Vec<String>>>,
}

impl MockS3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) {
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{}/{}", bucket, key), data);
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageService for MockS3 {
    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, RelayError> {
        let path = format!("{}/{}", bucket, key);
        self.downloads.lock().unwrap().push(path.clone());

        self.objects
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or_else(|| {
                RelayError::Storage(format!(
                    "S3 download of s3://{} failed: NoSuchKey: The specified key does not exist.",
                    path
                ))
            })
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub from: String,
    pub to: Vec<String>,
    pub raw: Vec<u8>,
    pub message_id: String,
}

/// Mock SES client recording every raw send
#[derive(Clone, Default)]
pub struct MockSES {
    pub sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    pub attempts: Arc<Mutex<usize>>,
    pub failure: Option<String>,
}

impl MockSES {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every send with the given provider message
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn get_sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    pub fn get_attempt_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn last_sent(&self) -> Option<SentEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for MockSES {
    async fn send_raw_email(
        &self,
        raw_email: &[u8],
        from: &str,
        to: &[String],
    ) -> Result<String, RelayError> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(reason) = &self.failure {
            return Err(RelayError::Ses(reason.clone()));
        }

        let mut sent = self.sent_emails.lock().unwrap();
        let message_id = format!("0100019a-mock-{:04}", sent.len() + 1);
        sent.push(SentEmail {
            from: from.to_string(),
            to: to.to_vec(),
            raw: raw_email.to_vec(),
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_s3() {
        let s3 = MockS3::new();
        s3.put_object("bucket", "key", b"content".to_vec());

        assert_eq!(s3.download("bucket", "key").await.unwrap(), b"content");
        assert!(s3.download("bucket", "other").await.is_err());
        assert_eq!(s3.download_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_ses() {
        let ses = MockSES::new();
        let id = ses
            .send_raw_email(b"raw", "a@x.com", &["b@x.com".to_string()])
            .await
            .unwrap();

        assert_eq!(ses.get_sent_count(), 1);
        assert_eq!(ses.last_sent().unwrap().message_id, id);

        let failing = MockSES::failing("Throttling");
        let err = failing
            .send_raw_email(b"raw", "a@x.com", &[])
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "Throttling");
        assert_eq!(failing.get_attempt_count(), 1);
    }
}
