//! Rendering helpers for the operator-facing run summary.

use hebfix_types::record::RecordId;
use hebfix_types::report::FixReport;
use serde_json::Value;

/// Ids shown before the list is cut short.
pub const MAX_LISTED_IDS: usize = 20;

/// Two-line summary: counts, then the (possibly truncated) fixed ids.
pub fn render_summary(report: &FixReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Fixed {} questions out of {}\n",
        report.fixed, report.total
    ));
    out.push_str(&format!("Fixed IDs: {}\n", render_id_list(&report.fixed_ids)));
    out
}

/// `[a, b, c]`, or the first twenty followed by `...` when longer.
pub fn render_id_list(ids: &[RecordId]) -> String {
    let shown = &ids[..ids.len().min(MAX_LISTED_IDS)];
    let body = shown.iter().map(render_id).collect::<Vec<_>>().join(", ");
    if ids.len() > MAX_LISTED_IDS {
        format!("[{}]...", body)
    } else {
        format!("[{}]", body)
    }
}

fn render_id(id: &RecordId) -> String {
    match id.as_value() {
        Value::String(s) => quote_id(s),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Single-quoted unless the id holds a `'` and no `"`.
fn quote_id(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) < 0x100 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
