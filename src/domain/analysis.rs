use super::intent::Intent;

/// Outcome of routing a query: the chosen intent and its result text.
///
/// Produced once per routed query, returned to the caller, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub intent: Intent,
    pub result: String,
}

impl Analysis {
    pub fn new(intent: Intent, result: impl Into<String>) -> Self {
        Self {
            intent,
            result: result.into(),
        }
    }
}
