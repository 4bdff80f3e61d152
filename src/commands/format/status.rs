//! Status message formatting helpers

use relnote_core::error::Result;
use relnote_core::format::escape_quotes;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", Some("Config written"), &[("path", json!(".relnote/config.toml"))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the records header line for a command
///
/// Text fields are rendered as `key="value"` with quotes escaped, counts
/// as bare `key=N`.
pub fn print_records_header(mode: &str, fields: &[(&str, &str)], counts: &[(&str, usize)]) {
    println!("{}", records_header(mode, fields, counts));
}

fn records_header(mode: &str, fields: &[(&str, &str)], counts: &[(&str, usize)]) -> String {
    let mut line = format!("H relnote=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}=\"{}\"", key, escape_quotes(value)));
    }
    for (key, count) in counts {
        line.push_str(&format!(" {}={}", key, count));
    }
    line
}
