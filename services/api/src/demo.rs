use crate::infra::{parse_answer, parse_date, parse_timestamp};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use clap::Args;
use sakhi::config::AppConfig;
use sakhi::error::AppError;
use sakhi::workflows::assessment::{
    predict_risk, recommendations, AnswerSet, QuestionCategory, Questionnaire, Recommendation,
    RiskAssessment,
};
use sakhi::workflows::companion::{
    ChatMessage, CompanionChat, CompanionProvider, CompanionReply, GeminiProvider, Sender,
};
use sakhi::workflows::plans::{
    estimate_weekly_calories, generate_diet_plan, nutritional_tips, workout_plan, DayPlan,
};
use sakhi::workflows::reminders::{due_reminders, pick_reminder, LastShown};
use sakhi::workflows::sentiment::{summarize_sentiment, IntensifierScope, SentimentAnalyzer};
use sakhi::workflows::tracking::{
    CycleEntry, InMemoryStateStore, ReminderToggles, StateStore, TrackerService, WeighTime,
    WeightEntry,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Questionnaire answer as questionId=value (repeatable), e.g. --answer q1=irregular
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SentimentArgs {
    /// Text to analyze
    #[arg(required = true, num_args = 1..)]
    pub(crate) text: Vec<String>,
    /// Let an intensifier boost only the word right after it
    #[arg(long)]
    pub(crate) adjacent: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DietPlanArgs {
    /// Seed the plan from a date (YYYY-MM-DD) so it can be reproduced
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RemindersArgs {
    /// Local time to evaluate (YYYY-MM-DDTHH:MM). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) at: Option<NaiveDateTime>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the companion chat portion of the demo.
    #[arg(long)]
    pub(crate) skip_chat: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let questionnaire = Questionnaire::standard();
    let mut answers = AnswerSet::new();

    for (question_id, value) in &args.answers {
        match questionnaire.get(question_id) {
            Some(question) if question.score_for(value).is_some() => {
                answers.insert(question_id, value)
            }
            Some(question) => {
                let options: Vec<&str> = question
                    .options
                    .iter()
                    .map(|option| option.value.as_str())
                    .collect();
                println!(
                    "Ignoring {question_id}={value}: expected one of {}",
                    options.join(", ")
                );
            }
            None => println!("Ignoring {question_id}: not a questionnaire item"),
        }
    }

    let assessment = predict_risk(&answers, questionnaire.questions());
    let advice = recommendations(&answers, &questionnaire);
    if args.json {
        let payload = serde_json::json!({
            "assessment": assessment,
            "recommendations": advice,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_assessment(&assessment);
    render_recommendations(&advice);
    let unanswered = questionnaire.unanswered(&answers);
    if !unanswered.is_empty() {
        println!("Unanswered (scored as lowest): {}", unanswered.join(", "));
    }
    Ok(())
}

pub(crate) fn run_sentiment(args: SentimentArgs) -> Result<(), AppError> {
    let scope = if args.adjacent {
        IntensifierScope::Adjacent
    } else {
        IntensifierScope::Pending
    };
    let text = args.text.join(" ");
    let result = SentimentAnalyzer::new(scope).analyze(&text);

    println!(
        "{} {:?} | score {:+.2} | magnitude {:.2}",
        result.tags.emoji, result.label, result.score, result.magnitude
    );
    Ok(())
}

pub(crate) fn run_diet_plan(args: DietPlanArgs) -> Result<(), AppError> {
    let plan = generate_diet_plan(args.date);
    render_diet_plan(&plan);
    Ok(())
}

pub(crate) fn run_workout_plan() -> Result<(), AppError> {
    for day in workout_plan() {
        println!("{} - {} ({})", day.day, day.kind, day.duration);
        for exercise in &day.exercises {
            println!("  - {exercise}");
        }
    }
    println!("\nNutrition tips");
    for tip in nutritional_tips() {
        println!("  - {tip}");
    }
    Ok(())
}

pub(crate) fn run_reminders(args: RemindersArgs) -> Result<(), AppError> {
    let now = args.at.unwrap_or_else(|| Local::now().naive_local());
    let due = due_reminders(&ReminderToggles::default(), &LastShown::default(), now);

    if due.is_empty() {
        println!("No reminders due at {}", now.format("%Y-%m-%d %H:%M"));
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    for slot in due {
        let reminder = pick_reminder(slot, now, &mut rng);
        println!("{} [{}] {}", reminder.icon, slot.as_str(), reminder.message);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let tracker = TrackerService::new(Arc::new(InMemoryStateStore::default()));

    println!("Sakhi workflow demo");

    let answers = AnswerSet::new()
        .with("q1", "irregular")
        .with("q3", "mild")
        .with("q4", "persistent")
        .with("q8", "suspected")
        .with("q10", "high")
        .with("q11", "sedentary");
    let advice = recommendations(&answers, tracker.questionnaire());
    let (assessment, record) = tracker.record_assessment(answers)?;
    println!("\nRisk assessment");
    render_assessment(&assessment);
    println!("  Stored record score: {}/{}", record.score, record.max_score);
    render_recommendations(&advice);

    let moods = ["Happy", "Good", "Okay", "Tired", "Sad", "Anxious"];
    for (offset, mood) in moods.iter().enumerate() {
        let date = today - Duration::days((moods.len() - offset) as i64);
        let mut entry = CycleEntry::new(date, offset == 0);
        entry.mood = Some(mood.to_string());
        tracker.add_cycle_entry(entry)?;
    }
    tracker.add_cycle_entry(CycleEntry::new(today - Duration::days(34), true))?;

    for (days_ago, weight) in [(21, 72.4), (14, 71.9), (7, 71.6), (0, 71.2)] {
        tracker.add_weight_entry(WeightEntry {
            date: today - Duration::days(days_ago),
            weight,
            time: WeighTime::Morning,
        })?;
    }

    let trend = tracker.mood_trend()?;
    println!("\nMood trend: {:?}", trend.trend);
    println!("  {}", trend.description);
    println!("  Suggestion: {}", trend.suggestion);

    let journal = [
        "Feeling energetic and happy after yoga",
        "Good day, calm and relaxed",
        "Tired and bloated, cramps all evening",
        "Very anxious and frustrated about acne",
    ];
    let summary = summarize_sentiment(&journal);
    println!(
        "\nJournal sentiment: {} average {:+.2}, trend {:?}, mostly {:?}",
        summary.emoji, summary.average_score, summary.trend, summary.predominant
    );

    println!("\nDiet plan seeded for {today}");
    render_diet_plan(&generate_diet_plan(Some(today)));

    if !args.skip_chat {
        let companion = match AppConfig::load() {
            Ok(config) => CompanionChat::from_optional(
                GeminiProvider::new(&config.companion).ok().map(Arc::new),
            ),
            Err(_) => CompanionChat::<GeminiProvider>::fallback_only(),
        };
        let question = "What diet should I follow for PCOS?";
        let (user_message, reply) = ask_companion(&tracker, &companion, question).await?;
        println!("\nCompanion chat ({:?})", reply.source);
        println!("  You: {}", user_message.text);
        println!("  Sakhi: {}", reply.text);
    }

    let stats = tracker.stats()?;
    println!("\nTracking stats");
    println!(
        "- {} days tracked | avg cycle {} days | current weight {:.1} kg | {} chats",
        stats.days_tracked, stats.avg_cycle_length, stats.current_weight, stats.total_chats
    );

    let exported = tracker.export()?;
    println!(
        "- export snapshot at {} with {} assessments",
        exported.exported_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        exported.state.assessments.len()
    );

    Ok(())
}

/// Logs `question` and the companion's reply. The provider sees only the
/// conversation that preceded `question`.
async fn ask_companion<S, P>(
    tracker: &TrackerService<S>,
    companion: &CompanionChat<P>,
    question: &str,
) -> Result<(ChatMessage, CompanionReply), AppError>
where
    S: StateStore + 'static,
    P: CompanionProvider + 'static,
{
    let history = tracker.state()?.chat_messages;
    let user_message = tracker.add_chat_message(question.to_string(), Sender::User)?;
    let reply = companion.respond(question, &history).await;
    tracker.add_chat_message(reply.text.clone(), Sender::Ai)?;
    Ok((user_message, reply))
}

fn render_assessment(assessment: &RiskAssessment) {
    println!(
        "  Risk {:.1}% ({}) | confidence {:.0}%",
        assessment.risk_score,
        assessment.risk_level.label(),
        assessment.confidence
    );
    println!("  {}", assessment.risk_level.guidance());
    for category in QuestionCategory::ALL {
        let score = assessment.breakdown.get(category);
        println!(
            "  - {}: {}/{} ({:.0}%)",
            category.label(),
            score.raw,
            score.max,
            score.percentage
        );
    }
}

fn render_recommendations(items: &[Recommendation]) {
    println!("  Recommendations");
    for item in items {
        println!("  {} {}: {}", item.icon, item.title, item.description);
    }
}

fn render_diet_plan(plan: &[DayPlan]) {
    for day in plan {
        println!("{}", day.day);
        println!("  Breakfast: {}", day.meals.breakfast.join(", "));
        println!("  Lunch:     {}", day.meals.lunch.join(", "));
        println!("  Dinner:    {}", day.meals.dinner.join(", "));
    }
    println!(
        "Estimated weekly intake: {} kcal",
        estimate_weekly_calories(plan)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sakhi::workflows::companion::{CompanionError, ReplySource};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        seen: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl CompanionProvider for RecordingProvider {
        async fn reply(
            &self,
            message: &str,
            history: &[ChatMessage],
        ) -> Result<String, CompanionError> {
            let texts = history.iter().map(|msg| msg.text.clone()).collect();
            self.seen.lock().expect("mutex").push(texts);
            Ok(format!("echo: {message}"))
        }
    }

    #[tokio::test]
    async fn companion_history_excludes_the_new_question() {
        let tracker = TrackerService::new(Arc::new(InMemoryStateStore::default()));
        tracker
            .add_chat_message("earlier question".to_string(), Sender::User)
            .expect("seed history");
        let provider = Arc::new(RecordingProvider::default());
        let companion = CompanionChat::new(provider.clone());

        let (user_message, reply) = ask_companion(&tracker, &companion, "what should I eat?")
            .await
            .expect("chat turn");

        assert_eq!(user_message.text, "what should I eat?");
        assert_eq!(reply.source, ReplySource::Remote);

        let seen = provider.seen.lock().expect("mutex");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].iter().any(|text| text == "earlier question"));
        assert!(!seen[0].iter().any(|text| text == "what should I eat?"));

        let stored = tracker.state().expect("state").chat_messages;
        let last_two: Vec<&str> = stored[stored.len() - 2..]
            .iter()
            .map(|msg| msg.text.as_str())
            .collect();
        assert_eq!(last_two, vec!["what should I eat?", "echo: what should I eat?"]);
    }
}
