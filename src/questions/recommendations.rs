use std::collections::HashMap;
use std::path::Path;
use crate::errors::QuizError;
use crate::models::QuestionBank;
use tracing::warn;

/// Recommendation shown when none of the chosen options carries advice.
pub const NO_RECOMMENDATION: &str = "N/A";

const MULTI_SELECT_SEPARATOR: char = ',';
const JOINER: &str = " | ";

/// Question text -> (answer option -> recommendation text).
#[derive(Debug, Clone, Default)]
pub struct RecommendationMap {
    entries: HashMap<String, HashMap<String, String>>,
}

impl RecommendationMap {
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let mut entries = HashMap::new();
        for category in &bank.compliance_categories {
            for q in &category.questions {
                let options = q
                    .response_options
                    .iter()
                    .map(|ro| (ro.option.clone(), ro.recommendation.clone()))
                    .collect();
                // Later duplicates replace earlier ones
                entries.insert(q.question.clone(), options);
            }
        }
        Self { entries }
    }

    /// Build the map from the bank file. A missing bank gives an empty map.
    pub async fn load(path: &Path) -> Result<Self, QuizError> {
        if !path.exists() {
            warn!(path = %path.display(), "Question bank not found, reporting without recommendations");
            return Ok(Self::default());
        }
        let bank = QuestionBank::load(path).await?;
        Ok(Self::from_bank(&bank))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advice for `answer` to `question`. Multi-select answers are
    /// comma-separated; each matched option contributes its text in order.
    pub fn recommend(&self, question: &str, answer: &str) -> String {
        let Some(options) = self.entries.get(question) else {
            return NO_RECOMMENDATION.to_string();
        };

        let recs: Vec<&str> = answer
            .split(MULTI_SELECT_SEPARATOR)
            .map(str::trim)
            .filter(|opt| !opt.is_empty())
            .filter_map(|opt| options.get(opt))
            .map(String::as_str)
            .filter(|rec| !rec.is_empty())
            .collect();

        if recs.is_empty() {
            NO_RECOMMENDATION.to_string()
        } else {
            recs.join(JOINER)
        }
    }
}
