use std::collections::BTreeMap;

use super::super::domain::{AnswerSet, Question};

/// Per-question option scores keyed by `<questionId>_score`.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FeatureVector(BTreeMap<String, f64>);

impl FeatureVector {
    pub(crate) fn extract(answers: &AnswerSet, questions: &[Question]) -> Self {
        let features = questions
            .iter()
            .map(|question| {
                let score = answers
                    .get(&question.id)
                    .and_then(|value| question.score_for(value))
                    .unwrap_or(0);
                (question.feature_key(), score as f64)
            })
            .collect();
        Self(features)
    }

    /// Missing features read as zero.
    pub(crate) fn value(&self, feature: &str) -> f64 {
        self.0.get(feature).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::Questionnaire;

    #[test]
    fn unanswered_and_unknown_values_extract_as_zero() {
        let questionnaire = Questionnaire::standard();
        let answers = AnswerSet::new()
            .with("q1", "very-irregular")
            .with("q3", "not-an-option");

        let features = FeatureVector::extract(&answers, questionnaire.questions());

        assert_eq!(features.value("q1_score"), 4.0);
        assert_eq!(features.value("q3_score"), 0.0);
        assert_eq!(features.value("q12_score"), 0.0);
        assert_eq!(features.value("q42_score"), 0.0);
    }
}
