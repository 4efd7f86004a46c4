use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_COMPANY_QUESTION: &str = "What is your company's name?";
pub const DEFAULT_EMAIL_QUESTION: &str = "What is your email address?";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct QuizConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Where the question bank, the response store and the static pages live.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub questions_path: PathBuf,
    pub responses_path: PathBuf,
    pub pages_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("questions.json"),
            responses_path: PathBuf::from("responses.csv"),
            pages_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Document title, also drawn at the top of the first page.
    pub title: String,
    /// Small label drawn in the top-right corner of every page.
    pub header_label: String,
    /// Attachment name offered by `GET /get-report`.
    pub filename: String,
    /// Question whose answer is recorded as the company column.
    pub company_question: String,
    /// Question whose answer is recorded as the email column.
    pub email_question: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Cybersecurity Report".to_string(),
            header_label: "Compliance Assessment".to_string(),
            filename: "cybersecurity_report.pdf".to_string(),
            company_question: DEFAULT_COMPANY_QUESTION.to_string(),
            email_question: DEFAULT_EMAIL_QUESTION.to_string(),
        }
    }
}

impl ReportConfig {
    /// Questions that are already shown in the report header.
    pub fn identity_questions(&self) -> [&str; 2] {
        [self.company_question.as_str(), self.email_question.as_str()]
    }
}
