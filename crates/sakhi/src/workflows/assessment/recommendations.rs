//! Follow-up advice derived from the answers themselves rather than the ensemble score.

use serde::Serialize;

use super::domain::AnswerSet;
use super::questionnaire::Questionnaire;

/// Raw answer total above which a clinician visit is suggested.
pub const CONSULT_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    ConsultProvider,
    Nutrition,
    PhysicalActivity,
    StressManagement,
    TrackSymptoms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl RecommendationKind {
    pub const fn recommendation(self) -> Recommendation {
        let (icon, title, description) = match self {
            RecommendationKind::ConsultProvider => (
                "🏥",
                "Consult a Healthcare Provider",
                "Based on your symptoms, we recommend consulting with a gynecologist or endocrinologist for proper diagnosis.",
            ),
            RecommendationKind::Nutrition => (
                "🥗",
                "Focus on Nutrition",
                "Consider a low-GI diet rich in whole grains, lean proteins, and vegetables. Avoid processed sugars.",
            ),
            RecommendationKind::PhysicalActivity => (
                "💪",
                "Increase Physical Activity",
                "Aim for 150 minutes of moderate exercise per week. Try a mix of cardio and strength training.",
            ),
            RecommendationKind::StressManagement => (
                "🧘‍♀️",
                "Manage Stress",
                "Practice stress-reduction techniques like yoga, meditation, or deep breathing exercises.",
            ),
            RecommendationKind::TrackSymptoms => (
                "📊",
                "Track Your Symptoms",
                "Use Sakhi to consistently track your cycle, weight, and symptoms to identify patterns.",
            ),
        };
        Recommendation {
            kind: self,
            icon,
            title,
            description,
        }
    }
}

/// Ordered advice for `answers`; symptom tracking is always last.
pub fn recommendations(answers: &AnswerSet, questionnaire: &Questionnaire) -> Vec<Recommendation> {
    let answered = |question: &str, values: &[&str]| {
        answers
            .get(question)
            .is_some_and(|value| values.contains(&value))
    };

    let raw_total: u32 = questionnaire
        .questions()
        .iter()
        .filter_map(|question| {
            answers
                .get(&question.id)
                .and_then(|value| question.score_for(value))
        })
        .sum();

    let mut kinds = Vec::new();
    if raw_total > CONSULT_THRESHOLD {
        kinds.push(RecommendationKind::ConsultProvider);
    }
    if answered("q8", &["diagnosed"]) || answered("q5", &["significant"]) {
        kinds.push(RecommendationKind::Nutrition);
    }
    if answered("q11", &["sedentary", "occasional"]) {
        kinds.push(RecommendationKind::PhysicalActivity);
    }
    if answered("q10", &["high"]) {
        kinds.push(RecommendationKind::StressManagement);
    }
    kinds.push(RecommendationKind::TrackSymptoms);

    kinds.into_iter().map(RecommendationKind::recommendation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(answers: &AnswerSet) -> Vec<RecommendationKind> {
        recommendations(answers, &Questionnaire::standard())
            .into_iter()
            .map(|item| item.kind)
            .collect()
    }

    // 4 + 4 + 4 + 3 + 3 + 2, touching none of the lifestyle or nutrition rules
    fn twenty_points() -> AnswerSet {
        AnswerSet::new()
            .with("q1", "very-irregular")
            .with("q2", "frequent")
            .with("q3", "moderate")
            .with("q6", "noticeable")
            .with("q7", "yes")
            .with("q8", "suspected")
    }

    #[test]
    fn empty_answers_only_suggest_tracking() {
        assert_eq!(kinds(&AnswerSet::new()), vec![RecommendationKind::TrackSymptoms]);
    }

    #[test]
    fn consult_needs_more_than_twenty_points() {
        assert_eq!(kinds(&twenty_points()), vec![RecommendationKind::TrackSymptoms]);

        let twenty_one = twenty_points().with("q9", "distant");
        assert_eq!(
            kinds(&twenty_one),
            vec![
                RecommendationKind::ConsultProvider,
                RecommendationKind::TrackSymptoms
            ]
        );
    }

    #[test]
    fn nutrition_follows_diagnosis_or_weight_gain() {
        let diagnosed = AnswerSet::new().with("q8", "diagnosed");
        let weight_gain = AnswerSet::new().with("q5", "significant");
        let some_gain = AnswerSet::new().with("q5", "some");

        assert_eq!(kinds(&diagnosed)[0], RecommendationKind::Nutrition);
        assert_eq!(kinds(&weight_gain)[0], RecommendationKind::Nutrition);
        assert_eq!(kinds(&some_gain), vec![RecommendationKind::TrackSymptoms]);
    }

    #[test]
    fn low_activity_suggests_exercise() {
        for value in ["sedentary", "occasional"] {
            let answers = AnswerSet::new().with("q11", value);
            assert_eq!(kinds(&answers)[0], RecommendationKind::PhysicalActivity);
        }
        let regular = AnswerSet::new().with("q11", "regular");
        assert_eq!(kinds(&regular), vec![RecommendationKind::TrackSymptoms]);
    }

    #[test]
    fn high_stress_suggests_stress_management() {
        let answers = AnswerSet::new().with("q10", "high");
        assert_eq!(
            kinds(&answers),
            vec![
                RecommendationKind::StressManagement,
                RecommendationKind::TrackSymptoms
            ]
        );
        assert_eq!(
            kinds(&AnswerSet::new().with("q10", "moderate")),
            vec![RecommendationKind::TrackSymptoms]
        );
    }

    #[test]
    fn all_rules_fire_in_order_for_the_highest_answers() {
        let answers = Questionnaire::standard().highest_answers();
        assert_eq!(
            kinds(&answers),
            vec![
                RecommendationKind::ConsultProvider,
                RecommendationKind::Nutrition,
                RecommendationKind::PhysicalActivity,
                RecommendationKind::StressManagement,
                RecommendationKind::TrackSymptoms,
            ]
        );
    }

    #[test]
    fn unknown_values_score_nothing() {
        let answers = twenty_points().with("q9", "cousins");
        assert_eq!(kinds(&answers), vec![RecommendationKind::TrackSymptoms]);
    }
}
