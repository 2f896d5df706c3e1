//! CSV transcript rendering.
//!
//! RFC 4180 quoting: fields containing commas, quotes, or newlines are
//! wrapped in double quotes with embedded quotes doubled.

use super::text::speaker;
use callout_core::session::SessionRecord;

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders the session as CSV with one row per message.
pub(crate) fn render(record: &SessionRecord) -> String {
    let mut out = String::from("Timestamp,Speaker,Language,Text,Translation\r\n");
    for message in &record.messages {
        let row = [
            quote(&message.timestamp),
            quote(speaker(message)),
            quote(&message.language),
            quote(&message.text),
            quote(message.translation.as_deref().unwrap_or("")),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }
    out
}
