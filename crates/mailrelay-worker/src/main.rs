use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use mailrelay_worker::models::RelayConfig;
use mailrelay_worker::{RelayContext, handler};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    info!("Starting Mailrelay Lambda function");

    // Missing or invalid configuration stops the function before any invocation
    let config = RelayConfig::from_env()?;
    let ctx = RelayContext::from_config(config).await;
    let ctx = &ctx;

    // Run the Lambda runtime
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(ctx, event).await
    }))
    .await
}
