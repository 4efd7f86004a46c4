use serde::{Deserialize, Serialize};

/// Category assigned to every question from the bank's `common` group.
pub const COMMON_CATEGORY: &str = "common";

/// Category used when a compliance category has no usable name.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Question type given to every categorized compliance question.
pub const SINGLE_CHOICE_TYPE: &str = "radio";

/// The question bank as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub common: Vec<CommonQuestion>,
    #[serde(default)]
    pub compliance_categories: Vec<ComplianceCategory>,
}

/// An ungrouped question. `kind` is passed through untouched
/// (`text`, `email`, `textarea`, `radio`, `checkbox`, `heading`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonQuestion {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<ComplianceQuestion>,
}

impl ComplianceCategory {
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_CATEGORY,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub response_options: Vec<ResponseOption>,
}

/// One selectable answer of a compliance question with the advice shown
/// in the report when it is chosen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseOption {
    #[serde(default)]
    pub option: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub acknowledgment: serde_json::Value,
}

/// A question in the uniform shape the quiz front-end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<String>,
    pub category: String,
}
