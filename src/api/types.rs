use serde::{Deserialize, Serialize};

/// Body of `POST /api/agent/ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
}

/// Body returned by both endpoints.
///
/// `answer` may be missing or null; callers substitute their own fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
