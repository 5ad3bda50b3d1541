mod breakdown;
mod features;
mod rules;

pub use rules::{RiskRule, RiskTree, STANDARD_TREES};

use super::domain::{AnswerSet, Question, RiskAssessment, RiskLevel, TreePrediction};
use breakdown::category_breakdown;
use features::FeatureVector;

const MIN_CONFIDENCE: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.95;

/// Stateless evaluator that averages a fixed table of decision stumps.
#[derive(Debug, Clone, Copy)]
pub struct RiskForest {
    trees: &'static [RiskTree],
}

impl Default for RiskForest {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskForest {
    pub fn standard() -> Self {
        Self::with_trees(STANDARD_TREES)
    }

    pub fn with_trees(trees: &'static [RiskTree]) -> Self {
        Self { trees }
    }

    pub fn trees(&self) -> &'static [RiskTree] {
        self.trees
    }

    pub fn predict(&self, answers: &AnswerSet, questions: &[Question]) -> RiskAssessment {
        let features = FeatureVector::extract(answers, questions);

        let tree_predictions: Vec<TreePrediction> = self
            .trees
            .iter()
            .map(|tree| TreePrediction {
                tree: tree.name.to_string(),
                prediction: evaluate_tree(&features, tree),
            })
            .collect();

        let predictions: Vec<f64> = tree_predictions
            .iter()
            .map(|entry| entry.prediction)
            .collect();
        let fraction = mean(&predictions);
        let confidence = confidence(&predictions, fraction);

        RiskAssessment {
            risk_score: fraction * 100.0,
            risk_level: RiskLevel::from_fraction(fraction),
            confidence: confidence * 100.0,
            tree_predictions,
            breakdown: category_breakdown(answers, questions),
        }
    }
}

/// Scores `answers` with the reference rule table.
pub fn predict_risk(answers: &AnswerSet, questions: &[Question]) -> RiskAssessment {
    RiskForest::standard().predict(answers, questions)
}

fn evaluate_tree(features: &FeatureVector, tree: &RiskTree) -> f64 {
    let emitted: Vec<f64> = tree
        .rules
        .iter()
        .map(|rule| rule.emit(features.value(rule.feature)))
        .collect();
    mean(&emitted)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Tight agreement between trees reads as high confidence.
fn confidence(predictions: &[f64], mean: f64) -> f64 {
    if predictions.is_empty() {
        return MIN_CONFIDENCE;
    }
    let variance = predictions
        .iter()
        .map(|prediction| (prediction - mean).powi(2))
        .sum::<f64>()
        / predictions.len() as f64;
    (1.0 - variance.sqrt()).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
