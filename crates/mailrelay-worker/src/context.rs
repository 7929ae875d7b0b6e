/// Cold-start context shared by every invocation
use mailrelay_core::models::RelayConfig;
use mailrelay_core::services::{EmailSender, S3StorageService, SesEmailSender, StorageService};
use std::sync::Arc;

pub struct RelayContext {
    pub config: RelayConfig,
    pub storage: Arc<dyn StorageService>,
    pub sender: Arc<dyn EmailSender>,
}

impl RelayContext {
    pub fn new(
        config: RelayConfig,
        storage: Arc<dyn StorageService>,
        sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            config,
            storage,
            sender,
        }
    }

    /// Builds S3 and SES clients for the configured region
    pub async fn from_config(config: RelayConfig) -> Self {
        let aws_config = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        let s3_client = aws_sdk_s3::Client::new(&aws_config);
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        Self::new(
            config,
            Arc::new(S3StorageService::new(s3_client)),
            Arc::new(SesEmailSender::new(ses_client)),
        )
    }
}
