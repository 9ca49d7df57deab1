use vidagent::infrastructure::observability::sanitize_query;

#[test]
fn given_empty_query_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_query(""), "[EMPTY]");
    assert_eq!(sanitize_query("   "), "[EMPTY]");
}

#[test]
fn given_short_query_when_sanitizing_then_returns_unchanged() {
    let query = "Please summarize this video";
    assert_eq!(sanitize_query(query), query);
}

#[test]
fn given_long_query_when_sanitizing_then_truncates_with_length() {
    let query = "a".repeat(150);
    let result = sanitize_query(&query);

    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let query = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_query(query);

    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let query = "summarize this, api_key=secret123";
    let result = sanitize_query(query);

    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_two_secrets_when_sanitizing_then_redacts_both() {
    let query = "api_key=abc123 and token=def456";
    let result = sanitize_query(query);

    assert!(result.contains("api_key=[REDACTED]"));
    assert!(result.contains("token=[REDACTED]"));
    assert!(!result.contains("abc123"));
    assert!(!result.contains("def456"));
}

#[test]
fn given_whitespace_padded_query_when_sanitizing_then_trims() {
    assert_eq!(sanitize_query("  Hello world  "), "Hello world");
}
