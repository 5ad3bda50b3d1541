use super::domain::{AnswerOption, AnswerSet, Question, QuestionCategory};

/// Ordered question catalogue the assessment screen walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The twelve recognized PCOS screening questions.
    pub fn standard() -> Self {
        use QuestionCategory::*;

        let questions = vec![
            question(
                "q1",
                "How regular is your menstrual cycle?",
                Menstrual,
                &[
                    ("regular", "Very regular (every 21-35 days)", 0),
                    ("irregular", "Somewhat irregular (varies by 7+ days)", 2),
                    ("very-irregular", "Very irregular or absent for 3+ months", 4),
                ],
            ),
            question(
                "q2",
                "Have you experienced absence of periods for 3+ months?",
                Menstrual,
                &[
                    ("no", "No, never", 0),
                    ("once", "Yes, once or twice", 2),
                    ("frequent", "Yes, frequently", 4),
                ],
            ),
            question(
                "q3",
                "Do you experience excessive hair growth (hirsutism)?",
                Physical,
                &[
                    ("no", "No unusual hair growth", 0),
                    ("mild", "Mild (upper lip, chin)", 2),
                    ("moderate", "Moderate to severe (face, chest, back)", 4),
                ],
            ),
            question(
                "q4",
                "Do you struggle with acne or oily skin?",
                Physical,
                &[
                    ("no", "No, clear skin", 0),
                    ("occasional", "Occasional breakouts", 1),
                    (
                        "persistent",
                        "Persistent acne, especially on face/chest/back",
                        3,
                    ),
                ],
            ),
            question(
                "q5",
                "Have you experienced unexplained weight gain?",
                Metabolic,
                &[
                    ("no", "No significant weight changes", 0),
                    ("some", "Some weight gain (2-5 kg)", 2),
                    (
                        "significant",
                        "Significant weight gain (5+ kg) or difficulty losing weight",
                        3,
                    ),
                ],
            ),
            question(
                "q6",
                "Do you experience hair thinning or hair loss?",
                Physical,
                &[
                    ("no", "No hair thinning", 0),
                    ("mild", "Mild thinning", 2),
                    (
                        "noticeable",
                        "Noticeable hair loss or male-pattern baldness",
                        3,
                    ),
                ],
            ),
            question(
                "q7",
                "Do you have darkened skin patches (acanthosis nigricans)?",
                Physical,
                &[
                    ("no", "No dark patches", 0),
                    ("yes", "Yes, especially on neck, armpits, or groin", 3),
                ],
            ),
            question(
                "q8",
                "Have you been diagnosed with insulin resistance or pre-diabetes?",
                Metabolic,
                &[
                    ("no", "No", 0),
                    ("suspected", "Suspected but not confirmed", 2),
                    ("diagnosed", "Yes, diagnosed by a doctor", 4),
                ],
            ),
            question(
                "q9",
                "Do you have a family history of PCOS, diabetes, or thyroid issues?",
                Metabolic,
                &[
                    ("no", "No family history", 0),
                    ("distant", "Distant relatives (cousins, aunts)", 1),
                    ("immediate", "Immediate family (mother, sister)", 3),
                ],
            ),
            question(
                "q10",
                "How would you describe your stress levels?",
                Lifestyle,
                &[
                    ("low", "Low, well-managed", 0),
                    ("moderate", "Moderate, some stressful periods", 1),
                    ("high", "High, constantly stressed", 2),
                ],
            ),
            question(
                "q11",
                "How often do you exercise?",
                Lifestyle,
                &[
                    ("regular", "3+ times per week", 0),
                    ("occasional", "1-2 times per week", 1),
                    ("sedentary", "Rarely or never", 2),
                ],
            ),
            question(
                "q12",
                "How would you describe your diet?",
                Lifestyle,
                &[
                    ("healthy", "Balanced, whole foods, low sugar", 0),
                    ("moderate", "Mix of healthy and processed foods", 1),
                    ("unhealthy", "Frequent processed foods, high sugar", 2),
                ],
            ),
        ];

        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn in_category(&self, category: QuestionCategory) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.category == category)
    }

    /// Question ids without a recognised answer, in questionnaire order.
    pub fn unanswered<'a>(&'a self, answers: &AnswerSet) -> Vec<&'a str> {
        self.questions
            .iter()
            .filter(|question| {
                answers
                    .get(&question.id)
                    .and_then(|value| question.score_for(value))
                    .is_none()
            })
            .map(|question| question.id.as_str())
            .collect()
    }

    /// Every question answered with its lowest-scoring option.
    pub fn lowest_answers(&self) -> AnswerSet {
        self.questions
            .iter()
            .filter_map(|question| {
                question
                    .min_option()
                    .map(|option| (question.id.clone(), option.value.clone()))
            })
            .collect()
    }

    /// Every question answered with its highest-scoring option.
    pub fn highest_answers(&self) -> AnswerSet {
        self.questions
            .iter()
            .filter_map(|question| {
                question
                    .max_option()
                    .map(|option| (question.id.clone(), option.value.clone()))
            })
            .collect()
    }
}

fn question(
    id: &str,
    prompt: &str,
    category: QuestionCategory,
    options: &[(&str, &str, u32)],
) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        category,
        options: options
            .iter()
            .map(|(value, label, score)| AnswerOption::new(value, label, *score))
            .collect(),
    }
}
