/// AWS service clients
pub mod s3;
pub mod ses;

// Re-export service traits
pub use s3::{S3StorageService, StorageService};
pub use ses::{EmailSender, SendOutcome, SesEmailSender, dispatch};
