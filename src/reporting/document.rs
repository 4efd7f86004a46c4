use crate::config::ReportConfig;
use crate::models::SubmissionRecord;
use crate::questions::RecommendationMap;

/// One numbered question/answer/recommendation block of the report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub number: usize,
    pub question: String,
    pub answer: String,
    pub recommendation: String,
}

/// Everything drawn on the report, before layout.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub header_label: String,
    pub timestamp: String,
    pub company: String,
    pub email: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportDocument {
    /// The identity questions are left out of the body since the header
    /// already shows them; the remaining answers are numbered from 1.
    pub fn build(
        record: &SubmissionRecord,
        recommendations: &RecommendationMap,
        config: &ReportConfig,
    ) -> Self {
        let skipped = config.identity_questions();
        let entries = record
            .responses
            .iter()
            .filter(|r| !skipped.contains(&r.question.as_str()))
            .enumerate()
            .map(|(i, r)| ReportEntry {
                number: i + 1,
                question: r.question.clone(),
                answer: r.answer.clone(),
                recommendation: recommendations.recommend(&r.question, &r.answer),
            })
            .collect();

        Self {
            title: config.title.clone(),
            header_label: config.header_label.clone(),
            timestamp: record.timestamp.clone(),
            company: record.company.clone(),
            email: record.email.clone(),
            entries,
        }
    }
}
