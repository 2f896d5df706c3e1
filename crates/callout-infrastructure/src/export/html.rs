//! HTML transcript rendering.

use super::text::{clock, speaker};
use callout_core::session::SessionRecord;

/// Escapes text for inclusion in HTML element content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the session as a standalone styled HTML document.
pub(crate) fn render(record: &SessionRecord) -> String {
    let mut body = String::new();
    for message in &record.messages {
        let class = if message.is_outgoing { "outgoing" } else { "incoming" };
        body.push_str(&format!(
            "    <div class=\"message {}\">\n      <span class=\"meta\">[{}] {} ({})</span>\n      <p>{}</p>\n",
            class,
            escape(&clock(&message.timestamp)),
            speaker(message),
            escape(&message.language),
            escape(&message.text)
        ));
        if let Some(ref translation) = message.translation {
            body.push_str(&format!(
                "      <p class=\"translation\">{}</p>\n",
                escape(translation)
            ));
        }
        body.push_str("    </div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Session {id}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 48em; margin: 2em auto; }}
    .message {{ margin: 0.5em 0; padding: 0.5em; border-radius: 6px; }}
    .outgoing {{ background: #e3f2fd; }}
    .incoming {{ background: #f1f8e9; }}
    .meta {{ color: #666; font-size: 0.85em; }}
    .translation {{ color: #444; font-style: italic; margin-left: 1em; }}
    p {{ margin: 0.2em 0; }}
  </style>
</head>
<body>
  <h1>Voice Chat Session Transcript</h1>
  <p>Session: {id}<br>Started: {start}<br>Ended: {end}<br>Messages: {count}</p>
  <div class="transcript">
{body}  </div>
</body>
</html>
"#,
        id = escape(&record.session_id),
        start = escape(&record.start_time),
        end = escape(&record.end_time),
        count = record.stats.total_messages,
        body = body
    )
}
