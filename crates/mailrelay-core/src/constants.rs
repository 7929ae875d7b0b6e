/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Environment Variables
// ============================================================================
/// AWS region for the S3 and SES clients
pub const ENV_REGION: &str = "REGION";

/// Bucket the SES receipt rule stores raw messages in
pub const ENV_BUCKET_NAME: &str = "BUCKET_NAME";

/// Verified SES identity used as the forwarding sender
pub const ENV_MAIL_SENDER: &str = "MAIL_SENDER";

/// Fixed address every forwarded message is delivered to
pub const ENV_MAIL_RECIPIENT: &str = "MAIL_RECIPIENT";

// ============================================================================
// Forwarding Summary
// ============================================================================

/// First line of the plain-text summary part
pub const FORWARD_PREAMBLE: &str = "This is a forwarded message";

/// Rendered in place of an absent From/To/Cc header
pub const EMPTY_HEADER_PLACEHOLDER: &str = "empty";

/// Joins multiple addresses of one header
pub const ADDRESS_SEPARATOR: &str = ";";

/// Scheme of the archive locator line
pub const ARCHIVE_SCHEME: &str = "s3://";

// ============================================================================
// Attachment
// ============================================================================

/// Replaces each run of non-alphanumeric subject characters
pub const FILENAME_SEPARATOR: &str = "_";

/// Extension of the attached original
pub const ATTACHMENT_EXTENSION: &str = ".eml";

/// Media type of the attached original
pub const ATTACHED_MESSAGE_CONTENT_TYPE: &str = "message/rfc822";

// ============================================================================
// Dispatch
// ============================================================================

/// Prefix of the confirmation line logged after a successful send
pub const SENT_CONFIRMATION_PREFIX: &str = "E-mail sent with message_id: ";
