use vidagent::domain::Intent;

#[test]
fn given_each_summary_keyword_when_classifying_then_returns_summary() {
    for query in [
        "summarize the talk",
        "give me the key points",
        "a short summary please",
        "what are the main ideas",
    ] {
        assert_eq!(Intent::classify(query), Intent::Summary, "query: {query}");
    }
}

#[test]
fn given_each_web_search_keyword_when_classifying_then_returns_web_search() {
    for query in [
        "search the web for this",
        "find more about the speaker",
        "look up the source",
        "any additional info on this",
    ] {
        assert_eq!(Intent::classify(query), Intent::WebSearch, "query: {query}");
    }
}

#[test]
fn given_each_fact_check_keyword_when_classifying_then_returns_fact_check() {
    for query in [
        "please fact-check this claim",
        "verify the numbers",
        "is this true",
        "check the dates",
    ] {
        assert_eq!(Intent::classify(query), Intent::FactCheck, "query: {query}");
    }
}

#[test]
fn given_mixed_case_query_when_classifying_then_matching_is_case_insensitive() {
    assert_eq!(Intent::classify("PLEASE SUMMARIZE THIS"), Intent::Summary);
    assert_eq!(Intent::classify("Fact-Check the claim"), Intent::FactCheck);
    assert_eq!(Intent::classify("Look Up the source"), Intent::WebSearch);
}

#[test]
fn given_summary_and_search_keywords_when_classifying_then_summary_wins() {
    assert_eq!(Intent::classify("search for a summary"), Intent::Summary);
}

#[test]
fn given_search_and_fact_check_keywords_when_classifying_then_web_search_wins() {
    assert_eq!(
        Intent::classify("verify this, then look up sources"),
        Intent::WebSearch
    );
}

#[test]
fn given_keyword_inside_word_when_classifying_then_substring_matches() {
    // containment, not word boundaries: "research" carries "search"
    assert_eq!(Intent::classify("research this further"), Intent::WebSearch);
}

#[test]
fn given_no_keywords_when_classifying_then_returns_unknown() {
    assert_eq!(Intent::classify("what is the weather"), Intent::Unknown);
}

#[test]
fn given_empty_query_when_classifying_then_returns_unknown() {
    assert_eq!(Intent::classify(""), Intent::Unknown);
}

#[test]
fn given_intents_when_serializing_then_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&Intent::Summary).unwrap(),
        r#""summary""#
    );
    assert_eq!(
        serde_json::to_string(&Intent::WebSearch).unwrap(),
        r#""web_search""#
    );
    assert_eq!(
        serde_json::to_string(&Intent::FactCheck).unwrap(),
        r#""fact_check""#
    );
    assert_eq!(
        serde_json::to_string(&Intent::Unknown).unwrap(),
        r#""unknown""#
    );
}

#[test]
fn given_intents_when_rendered_as_str_then_matches_wire_names() {
    assert_eq!(Intent::Summary.as_str(), "summary");
    assert_eq!(Intent::WebSearch.as_str(), "web_search");
    assert_eq!(Intent::FactCheck.as_str(), "fact_check");
    assert_eq!(Intent::Unknown.as_str(), "unknown");
}
