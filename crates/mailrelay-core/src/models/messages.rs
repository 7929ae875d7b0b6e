/// Forwarding envelope ready for SES raw send
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// Configured sender, used as the SES `Source`
    pub source: String,
    /// Configured recipient, used as the SES `Destinations`
    pub destinations: Vec<String>,
    /// Plain-text summary carried in the first MIME part
    pub summary: String,
    /// Filename of the attached original
    pub attachment_filename: String,
    /// Serialized MIME document
    pub raw: Vec<u8>,
}
