/// Attachment naming for the forwarded original
use crate::constants::{ATTACHMENT_EXTENSION, FILENAME_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-zA-Z]+").unwrap());

/// Derives the filename of the attached original from its subject
///
/// Every run of characters outside `[0-9a-zA-Z]` collapses into one `_`, and
/// separators at either end are dropped. A subject with nothing alphanumeric
/// in it yields `_.eml`.
///
/// # Examples
/// ```
/// use mailrelay_core::email::attachment::attachment_filename;
///
/// assert_eq!(attachment_filename("Q3 Report!! (final)"), "Q3_Report_final.eml");
/// assert_eq!(attachment_filename("Hello"), "Hello.eml");
/// assert_eq!(attachment_filename(""), "_.eml");
/// ```
pub fn attachment_filename(subject: &str) -> String {
    let collapsed = NON_ALPHANUMERIC_RUN.replace_all(subject, FILENAME_SEPARATOR);
    let stem = collapsed.trim_matches(|c: char| FILENAME_SEPARATOR.contains(c));

    if stem.is_empty() {
        format!("{}{}", FILENAME_SEPARATOR, ATTACHMENT_EXTENSION)
    } else {
        format!("{}{}", stem, ATTACHMENT_EXTENSION)
    }
}
