use serde::{Deserialize, Serialize};

/// Identity value recorded when a submission does not answer the question.
pub const UNKNOWN_IDENTITY: &str = "Unknown";

/// A single answered question as posted by the quiz page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl ResponseItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Answer of the first item asking `question`, or `"Unknown"`.
pub fn find_answer(responses: &[ResponseItem], question: &str) -> String {
    responses
        .iter()
        .find(|r| r.question == question)
        .map(|r| r.answer.clone())
        .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string())
}

/// One row of the response store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub timestamp: String,
    pub company: String,
    pub email: String,
    pub responses: Vec<ResponseItem>,
}
