use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed groupings used for sub-scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Menstrual,
    Physical,
    Metabolic,
    Lifestyle,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Menstrual,
        QuestionCategory::Physical,
        QuestionCategory::Metabolic,
        QuestionCategory::Lifestyle,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            QuestionCategory::Menstrual => "Menstrual",
            QuestionCategory::Physical => "Physical",
            QuestionCategory::Metabolic => "Metabolic",
            QuestionCategory::Lifestyle => "Lifestyle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    pub score: u32,
}

impl AnswerOption {
    pub fn new(value: &str, label: &str, score: u32) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub category: QuestionCategory,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Score of the option matching `value`, if any.
    pub fn score_for(&self, value: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.score)
    }

    pub fn max_score(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.score)
            .max()
            .unwrap_or(0)
    }

    pub fn min_option(&self) -> Option<&AnswerOption> {
        self.options.iter().min_by_key(|option| option.score)
    }

    pub fn max_option(&self) -> Option<&AnswerOption> {
        self.options.iter().max_by_key(|option| option.score)
    }

    /// Feature key consumed by the risk rules.
    pub fn feature_key(&self) -> String {
        feature_key(&self.id)
    }
}

pub(crate) fn feature_key(question_id: &str) -> String {
    format!("{question_id}_score")
}

/// Chosen option value per question id. Each question is answered at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question_id: &str, value: &str) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Records an answer, replacing any earlier choice for the same question.
    pub fn insert(&mut self, question_id: &str, value: &str) {
        self.0.insert(question_id.to_string(), value.to_string());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const LOW_CEILING: f64 = 0.30;
    pub const MODERATE_CEILING: f64 = 0.60;

    /// Bands an ensemble fraction (0..1). Each ceiling is inclusive.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction <= Self::LOW_CEILING {
            RiskLevel::Low
        } else if fraction <= Self::MODERATE_CEILING {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            RiskLevel::Low => "Few indicators reported. Keep tracking your cycle.",
            RiskLevel::Moderate => {
                "Some indicators reported. Consider discussing them with a doctor."
            }
            RiskLevel::High => "Several indicators reported. Please consult a gynecologist.",
        }
    }
}

/// Raw and normalised score for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub raw: u32,
    pub max: u32,
    pub percentage: f64,
}

impl CategoryScore {
    pub(crate) fn from_totals(raw: u32, max: u32) -> Self {
        let percentage = if max > 0 {
            (raw as f64 / max as f64) * 100.0
        } else {
            0.0
        };
        Self {
            raw,
            max,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub menstrual: CategoryScore,
    pub physical: CategoryScore,
    pub metabolic: CategoryScore,
    pub lifestyle: CategoryScore,
}

impl CategoryBreakdown {
    pub fn get(&self, category: QuestionCategory) -> &CategoryScore {
        match category {
            QuestionCategory::Menstrual => &self.menstrual,
            QuestionCategory::Physical => &self.physical,
            QuestionCategory::Metabolic => &self.metabolic,
            QuestionCategory::Lifestyle => &self.lifestyle,
        }
    }

    pub fn total_raw(&self) -> u32 {
        QuestionCategory::ALL
            .iter()
            .map(|category| self.get(*category).raw)
            .sum()
    }
}

/// Output of the risk forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Ensemble mean scaled to 0..100.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// 50..95.
    pub confidence: f64,
    pub tree_predictions: Vec<TreePrediction>,
    pub breakdown: CategoryBreakdown,
}

impl RiskAssessment {
    pub fn to_record(&self, answers: AnswerSet, date: DateTime<Utc>) -> AssessmentRecord {
        AssessmentRecord {
            date,
            score: self.risk_score.round().clamp(0.0, 100.0) as u8,
            max_score: AssessmentRecord::MAX_SCORE,
            percentage: self.risk_score,
            risk_level: self.risk_level,
            answers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePrediction {
    pub tree: String,
    pub prediction: f64,
}

/// Persisted shape of a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub date: DateTime<Utc>,
    pub score: u8,
    pub max_score: u8,
    pub percentage: f64,
    pub risk_level: RiskLevel,
    pub answers: AnswerSet,
}

impl AssessmentRecord {
    pub const MAX_SCORE: u8 = 100;
}
