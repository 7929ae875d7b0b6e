/// Header extraction using mail-parser crate
use crate::constants::{ADDRESS_SEPARATOR, EMPTY_HEADER_PLACEHOLDER, FORWARD_PREAMBLE};
use crate::error::RelayError;
use mail_parser::{Addr, Address, Header, HeaderName, Message, MessageParser};

/// Header fields of the original message restated in the forwarding summary
///
/// `None` means the header is absent from the original, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    pub subject: Option<String>,
    pub from: Option<Vec<String>>,
    pub to: Option<Vec<String>>,
    pub cc: Option<Vec<String>>,
}

impl HeaderSet {
    /// Parses the header block of a raw message
    ///
    /// The raw bytes must be valid UTF-8; anything else is a parse error.
    pub fn parse(raw_email: &[u8]) -> Result<Self, RelayError> {
        let text = std::str::from_utf8(raw_email).map_err(|e| {
            RelayError::EmailParsing(format!("Message is not valid UTF-8: {}", e))
        })?;

        let message = MessageParser::default()
            .parse(text.as_bytes())
            .ok_or_else(|| RelayError::EmailParsing("Failed to parse email".to_string()))?;

        Ok(Self {
            subject: message.subject().map(|s| s.to_string()),
            from: extract_addresses(&message, HeaderName::From),
            to: extract_addresses(&message, HeaderName::To),
            cc: extract_addresses(&message, HeaderName::Cc),
        })
    }

    /// Subject of the original, empty when absent
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }

    /// Sender list as it appears in the summary
    pub fn from_line(&self) -> String {
        render_list(self.from.as_deref())
    }

    /// Plain-text summary of the original for the first MIME part
    pub fn summary(&self, archive_path: &str) -> String {
        [
            FORWARD_PREAMBLE.to_string(),
            format!("From: {}", self.from_line()),
            format!("To: {}", render_list(self.to.as_deref())),
            format!("Cc: {}", render_list(self.cc.as_deref())),
            format!("Subject: {}", self.subject()),
            format!("Archive path: {}", archive_path),
        ]
        .join("\n")
    }
}

fn render_list(addresses: Option<&[String]>) -> String {
    match addresses {
        Some(list) => list.join(ADDRESS_SEPARATOR),
        None => EMPTY_HEADER_PLACEHOLDER.to_string(),
    }
}

fn render_addr(addr: &Addr) -> Option<String> {
    match (addr.name.as_deref(), addr.address.as_deref()) {
        (Some(name), Some(address)) => Some(format!("{} <{}>", name, address)),
        (None, Some(address)) => Some(address.to_string()),
        (Some(name), None) => Some(name.to_string()),
        (None, None) => None,
    }
}

fn render_address(address: &Address) -> Vec<String> {
    match address {
        Address::List(list) => list.iter().filter_map(render_addr).collect(),
        Address::Group(groups) => groups
            .iter()
            .flat_map(|group| {
                if group.addresses.is_empty() {
                    // memberless group such as `undisclosed-recipients:;`
                    group.name.iter().map(|name| format!("{}:;", name)).collect::<Vec<_>>()
                } else {
                    group.addresses.iter().filter_map(render_addr).collect::<Vec<_>>()
                }
            })
            .collect(),
    }
}

fn raw_value(message: &Message, header: &Header) -> Option<String> {
    let raw = message
        .raw_message()
        .get(header.offset_start() as usize..header.offset_end() as usize)?;
    let value = std::str::from_utf8(raw).ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Collects every occurrence of an address header, in message order
///
/// An occurrence with no renderable mailbox falls back to its raw text.
fn extract_addresses<'x>(message: &Message<'x>, name: HeaderName<'x>) -> Option<Vec<String>> {
    let mut present = false;
    let mut rendered = Vec::new();

    for header in message.headers().iter().filter(|h| h.name == name) {
        present = true;
        let values = header
            .value()
            .as_address()
            .map(render_address)
            .unwrap_or_default();

        if values.is_empty() {
            rendered.extend(raw_value(message, header));
        } else {
            rendered.extend(values);
        }
    }

    present.then_some(rendered)
}
