use serde::Serialize;

/// Classification of a user's free-text request into a fixed action category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Summary,
    WebSearch,
    FactCheck,
    Unknown,
}

const SUMMARY_KEYWORDS: &[&str] = &["summarize", "key points", "summary", "main ideas"];
const WEB_SEARCH_KEYWORDS: &[&str] = &["search", "find more", "look up", "additional info"];
const FACT_CHECK_KEYWORDS: &[&str] = &["fact-check", "verify", "is this true", "check"];

impl Intent {
    /// Classifies a query by case-insensitive keyword containment.
    ///
    /// Exactly one intent is chosen per query: keyword sets are tested in
    /// the fixed priority order Summary > WebSearch > FactCheck, and the
    /// first set with any keyword present wins. A query matching nothing
    /// is `Unknown`.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();

        if contains_any(&query, SUMMARY_KEYWORDS) {
            Self::Summary
        } else if contains_any(&query, WEB_SEARCH_KEYWORDS) {
            Self::WebSearch
        } else if contains_any(&query, FACT_CHECK_KEYWORDS) {
            Self::FactCheck
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::WebSearch => "web_search",
            Self::FactCheck => "fact_check",
            Self::Unknown => "unknown",
        }
    }
}

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query.contains(keyword))
}
