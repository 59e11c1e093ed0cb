use serde_json::Value;

const MAX_ERROR_DETAIL_LENGTH: usize = 500;

fn truncate_error_detail(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_DETAIL_LENGTH {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_ERROR_DETAIL_LENGTH).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Extracts a human-readable message from a Linkup error body.
///
/// Linkup answers failures with `{"statusCode", "error": {"code", "message", "details"}}`;
/// older gateways send a bare `{"message"}` or `{"error": "..."}`.
#[must_use]
pub fn parse_linkup_error_message(payload_text: &str, fallback: &str) -> String {
    let Ok(payload) = serde_json::from_str::<Value>(payload_text) else {
        return fallback.to_string();
    };

    let error = payload.get("error");

    if let Some(message) = error
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
    {
        let mut message = truncate_error_detail(message);
        if let Some(details) = error
            .and_then(|error| error.get("details"))
            .and_then(Value::as_array)
        {
            let joined = details
                .iter()
                .filter_map(|entry| {
                    entry
                        .get("message")
                        .and_then(Value::as_str)
                        .map(|text| match entry.get("field").and_then(Value::as_str) {
                            Some(field) => format!("{field}: {text}"),
                            None => text.to_string(),
                        })
                        .or_else(|| entry.as_str().map(str::to_string))
                })
                .collect::<Vec<String>>()
                .join("; ");
            if !joined.is_empty() {
                message.push_str(" (");
                message.push_str(&truncate_error_detail(&joined));
                message.push(')');
            }
        }
        return message;
    }

    if let Some(message) = error.and_then(Value::as_str) {
        return truncate_error_detail(message);
    }

    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return truncate_error_detail(message);
    }

    fallback.to_string()
}
