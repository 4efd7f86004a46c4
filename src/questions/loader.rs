use std::path::Path;
use crate::errors::QuizError;
use crate::models::{
    Question, QuestionBank, COMMON_CATEGORY, SINGLE_CHOICE_TYPE,
};
use tracing::debug;

impl QuestionBank {
    pub async fn load(path: &Path) -> Result<Self, QuizError> {
        let content = tokio::fs::read_to_string(path).await?;
        let bank: QuestionBank = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            common = bank.common.len(),
            categories = bank.compliance_categories.len(),
            "Loaded question bank"
        );
        Ok(bank)
    }

    /// Normalize both question groups into the list the quiz page renders.
    /// Common questions come first, then each category in file order.
    pub fn flatten(&self) -> Vec<Question> {
        let common = self.common.iter().map(|q| Question {
            text: q.text.clone(),
            kind: q.kind.clone(),
            options: q.options.clone(),
            category: COMMON_CATEGORY.to_string(),
        });

        let categorized = self.compliance_categories.iter().flat_map(|category| {
            let label = category.label().to_string();
            category.questions.iter().map(move |q| Question {
                text: q.question.clone(),
                kind: SINGLE_CHOICE_TYPE.to_string(),
                options: q.response_options.iter().map(|ro| ro.option.clone()).collect(),
                category: label.clone(),
            })
        });

        common.chain(categorized).collect()
    }

    pub fn categorized_count(&self) -> usize {
        self.compliance_categories.iter().map(|c| c.questions.len()).sum()
    }
}

/// Read the bank at `path` and return its flattened question list.
pub async fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    Ok(QuestionBank::load(path).await?.flatten())
}
