/// Lambda event handlers
pub mod relay;

use crate::context::RelayContext;
use lambda_runtime::{Error, LambdaEvent};
use mailrelay_core::error::RelayError;
use mailrelay_core::models::SesEvent;
use serde_json::Value;
use tracing::{error, info};

/// Main Lambda handler - forwards the message named by an SES receipt event
///
/// Fetch and parse failures are returned as errors so Lambda applies its own
/// retry policy; a rejected send is reported in the response body instead.
pub async fn handler(ctx: &RelayContext, event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "Received Lambda event");

    let ses_event: SesEvent = serde_json::from_value(event.payload).map_err(|e| {
        error!("Failed to parse SES event: {}", e);
        RelayError::from(e)
    })?;

    let outcome = relay::handle(ctx, &ses_event).await?;

    Ok(serde_json::json!({
        "statusCode": 200,
        "body": outcome.to_string()
    }))
}
