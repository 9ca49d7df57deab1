const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes a user query for safe logging.
pub fn sanitize_query(query: &str) -> String {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_sensitive_patterns(trimmed);
    let total_chars = redacted.chars().count();

    if total_chars > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{visible}... ({total_chars} chars total)")
    } else {
        redacted
    }
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(pattern) {
            let idx = search_from + offset;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
            search_from = idx + replacement.len();
        }
    }

    result
}
