//! PCOS risk questionnaire and the decision-stump ensemble that scores it.
//!
//! The rule table is data: [`RiskForest::with_trees`] evaluates any table with the
//! same feature-extraction and aggregation logic as the reference one.

pub mod domain;
pub mod forest;
pub mod questionnaire;
pub mod recommendations;

pub use domain::{
    AnswerOption, AnswerSet, AssessmentRecord, CategoryBreakdown, CategoryScore, Question,
    QuestionCategory, RiskAssessment, RiskLevel, TreePrediction,
};
pub use forest::{predict_risk, RiskForest, RiskRule, RiskTree, STANDARD_TREES};
pub use questionnaire::Questionnaire;
pub use recommendations::{recommendations, Recommendation, RecommendationKind};
