//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::{Context, LambdaEvent};
use mailrelay_worker::models::RelayConfig;
use serde_json::Value;
use std::path::PathBuf;

pub mod mock_aws;

pub const TEST_BUCKET: &str = "mailrelay-inbound-test";
pub const TEST_SENDER: &str = "relay@example.com";
pub const TEST_RECIPIENT: &str = "ops@example.com";

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a test email fixture
pub fn load_email_fixture(name: &str) -> Vec<u8> {
    let path = fixtures_dir().join("emails").join(name);
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path))
}

/// Generate a unique SES-style message ID
pub fn generate_test_message_id() -> String {
    format!("test-{}", uuid::Uuid::new_v4().simple())
}

pub fn test_config() -> RelayConfig {
    RelayConfig {
        region: "us-east-1".to_string(),
        bucket_name: TEST_BUCKET.to_string(),
        mail_sender: TEST_SENDER.to_string(),
        mail_recipient: TEST_RECIPIENT.to_string(),
    }
}

/// SES receipt event as delivered by a Lambda receipt-rule action
pub fn ses_event_json(message_id: &str) -> Value {
    serde_json::json!({
        "Records": [{
            "eventSource": "aws:ses",
            "eventVersion": "1.0",
            "ses": {
                "mail": {
                    "messageId": message_id,
                    "timestamp": "2025-11-01T12:00:00.000Z",
                    "source": "a@x.com",
                    "destination": ["b@x.com"]
                },
                "receipt": {
                    "timestamp": "2025-11-01T12:00:00.000Z",
                    "recipients": ["b@x.com"],
                    "spamVerdict": {"status": "PASS"},
                    "virusVerdict": {"status": "PASS"},
                    "action": {
                        "type": "Lambda",
                        "invocationType": "Event"
                    }
                }
            }
        }]
    })
}

pub fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

/// Decodes the base64 body of the `Content-Disposition: attachment` part
pub fn attached_original(raw: &[u8]) -> Vec<u8> {
    let text = String::from_utf8(raw.to_vec()).expect("outbound message is ASCII");
    let part = text
        .find("Content-Disposition: attachment")
        .expect("attachment part present");
    let body_start = part + text[part..].find("\r\n\r\n").expect("part body") + 4;
    let body_end = body_start + text[body_start..].find("\r\n--").expect("closing boundary");
    let encoded: String = text[body_start..body_end].split_whitespace().collect();
    STANDARD.decode(encoded).expect("valid base64")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir() {
        let dir = fixtures_dir();
        assert!(dir.to_str().unwrap().contains("tests/fixtures"));
    }

    #[test]
    fn test_generate_test_message_id() {
        let id1 = generate_test_message_id();
        let id2 = generate_test_message_id();
        assert!(id1.starts_with("test-"));
        assert_ne!(id1, id2);
    }
}
