/// Forwarding pipeline - fetch, repackage, dispatch
use crate::context::RelayContext;
use mailrelay_core::email::ForwardingComposer;
use mailrelay_core::error::RelayError;
use mailrelay_core::models::SesEvent;
use mailrelay_core::services::{SendOutcome, dispatch};
use tracing::{info, warn};

pub async fn handle(ctx: &RelayContext, event: &SesEvent) -> Result<SendOutcome, RelayError> {
    if event.records.len() > 1 {
        warn!(
            "SES event carries {} records, only the first is forwarded",
            event.records.len()
        );
    }

    let message_id = event.message_id()?;
    forward_message(ctx, message_id).await
}

/// Forwards one stored message to the configured recipient
///
/// Storage and parse errors propagate; the send result never does.
#[tracing::instrument(name = "relay.forward_message", skip_all, fields(message_id = %message_id))]
pub async fn forward_message(
    ctx: &RelayContext,
    message_id: &str,
) -> Result<SendOutcome, RelayError> {
    info!("message_id: {}", message_id);
    info!("bucket_name: {}", ctx.config.bucket_name);

    let raw_email = ctx
        .storage
        .download(&ctx.config.bucket_name, message_id)
        .await?;

    let outbound = ForwardingComposer::new(&ctx.config).compose(message_id, &raw_email)?;
    info!(
        attachment = %outbound.attachment_filename,
        size = outbound.raw.len(),
        "Repackaged message for forwarding"
    );

    let outcome = dispatch(ctx.sender.as_ref(), &outbound).await;
    match &outcome {
        SendOutcome::Sent { .. } => info!("{}", outcome),
        SendOutcome::Failed { .. } => warn!("{}", outcome),
    }

    Ok(outcome)
}
