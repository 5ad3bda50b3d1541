use super::super::domain::{AnswerSet, CategoryBreakdown, CategoryScore, Question, QuestionCategory};

pub(crate) fn category_breakdown(answers: &AnswerSet, questions: &[Question]) -> CategoryBreakdown {
    let score = |category| category_score(answers, questions, category);

    CategoryBreakdown {
        menstrual: score(QuestionCategory::Menstrual),
        physical: score(QuestionCategory::Physical),
        metabolic: score(QuestionCategory::Metabolic),
        lifestyle: score(QuestionCategory::Lifestyle),
    }
}

fn category_score(
    answers: &AnswerSet,
    questions: &[Question],
    category: QuestionCategory,
) -> CategoryScore {
    let (raw, max) = questions
        .iter()
        .filter(|question| question.category == category)
        .fold((0u32, 0u32), |(raw, max), question| {
            let chosen = answers
                .get(&question.id)
                .and_then(|value| question.score_for(value))
                .unwrap_or(0);
            (raw + chosen, max + question.max_score())
        });

    CategoryScore::from_totals(raw, max)
}
