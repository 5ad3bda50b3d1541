use serde::{Deserialize, Serialize};

use super::analyzer::{analyze_sentiment, SentimentLabel};

const TREND_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    fn between(earlier: f64, later: f64) -> Self {
        if later - earlier > TREND_MARGIN {
            Trend::Improving
        } else if earlier - later > TREND_MARGIN {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub average_score: f64,
    pub trend: Trend,
    pub predominant: SentimentLabel,
    pub emoji: String,
}

/// Aggregates journal or chat entries, oldest first.
pub fn summarize_sentiment<S: AsRef<str>>(entries: &[S]) -> SentimentSummary {
    let Some(latest) = entries.last() else {
        return SentimentSummary {
            average_score: 0.0,
            trend: Trend::Stable,
            predominant: SentimentLabel::Neutral,
            emoji: SentimentLabel::Neutral.emoji().to_string(),
        };
    };

    let scores: Vec<_> = entries
        .iter()
        .map(|entry| analyze_sentiment(entry.as_ref()))
        .collect();
    let values: Vec<f64> = scores.iter().map(|score| score.score).collect();

    let trend = if values.len() >= 4 {
        let (first, second) = values.split_at(values.len() / 2);
        Trend::between(mean(first), mean(second))
    } else {
        Trend::Stable
    };

    // Counted in first-seen order so ties resolve to the earliest label.
    let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();
    for score in &scores {
        match counts.iter_mut().find(|(label, _)| *label == score.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((score.label, 1)),
        }
    }
    let predominant = counts
        .iter()
        .fold(None::<(SentimentLabel, usize)>, |best, &(label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label)
        .unwrap_or(SentimentLabel::Neutral);

    SentimentSummary {
        average_score: mean(&values),
        trend,
        predominant,
        emoji: analyze_sentiment(latest.as_ref()).label.emoji().to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrend {
    pub trend: Trend,
    pub description: String,
    pub suggestion: String,
}

/// Numeric weight of a logged mood label; unknown moods weigh zero.
pub fn mood_score(mood: &str) -> f64 {
    match mood {
        "Very Happy" => 1.0,
        "Happy" => 0.75,
        "Good" => 0.5,
        "Okay" => 0.25,
        "Sad" => -0.25,
        "Very Sad" => -0.5,
        "Anxious" => -0.3,
        "Tired" => -0.2,
        "Energetic" => 0.6,
        "Calm" => 0.4,
        _ => 0.0,
    }
}

/// Compares the last three logged moods against everything before them.
pub fn mood_trend<S: AsRef<str>>(moods: &[S]) -> MoodTrend {
    if moods.len() < 3 {
        return MoodTrend {
            trend: Trend::Stable,
            description: "Not enough data to determine trend".to_string(),
            suggestion: "Keep tracking your mood daily to see patterns".to_string(),
        };
    }

    let scores: Vec<f64> = moods.iter().map(|mood| mood_score(mood.as_ref())).collect();
    let (older, recent) = scores.split_at(scores.len() - 3);

    let trend = if older.is_empty() {
        Trend::Stable
    } else {
        Trend::between(mean(older), mean(recent))
    };

    let (description, suggestion) = match trend {
        Trend::Improving => (
            "Your mood has been improving recently 📈",
            "Keep up whatever you're doing! Your current routine seems to be working.",
        ),
        Trend::Declining => (
            "Your mood has been declining recently 📉",
            "Consider talking to someone, practicing self-care, or consulting your healthcare provider.",
        ),
        Trend::Stable => (
            "Your mood has been relatively stable",
            "Maintain your current lifestyle habits and keep tracking.",
        ),
    };

    MoodTrend {
        trend,
        description: description.to_string(),
        suggestion: suggestion.to_string(),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_neutral_and_stable() {
        let summary = summarize_sentiment::<&str>(&[]);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.predominant, SentimentLabel::Neutral);
    }

    #[test]
    fn summary_detects_improvement_across_halves() {
        let entries = [
            "sad and tired",
            "awful pain today",
            "feeling happy",
            "great and calm",
        ];
        let summary = summarize_sentiment(&entries);
        assert_eq!(summary.trend, Trend::Improving);
        assert_eq!(summary.emoji, SentimentLabel::VeryPositive.emoji());
    }

    #[test]
    fn predominant_label_ties_resolve_to_first_seen() {
        let entries = ["sad", "happy", "happy", "sad"];
        let summary = summarize_sentiment(&entries);
        assert_eq!(summary.predominant, SentimentLabel::VeryNegative);
        assert_eq!(summary.trend, Trend::Stable);
    }

    #[test]
    fn short_summaries_never_report_a_trend() {
        let summary = summarize_sentiment(&["sad", "happy", "happy"]);
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.predominant, SentimentLabel::VeryPositive);
    }

    #[test]
    fn mood_trend_needs_history_before_the_last_three() {
        assert_eq!(
            mood_trend(&["Sad", "Happy"]).description,
            "Not enough data to determine trend"
        );
        assert_eq!(mood_trend(&["Sad", "Happy", "Calm"]).trend, Trend::Stable);
    }

    #[test]
    fn mood_trend_compares_recent_to_older_entries() {
        let declining = mood_trend(&["Very Happy", "Happy", "Sad", "Tired", "Anxious"]);
        assert_eq!(declining.trend, Trend::Declining);

        let improving = mood_trend(&["Very Sad", "Sad", "Good", "Energetic", "Happy"]);
        assert_eq!(improving.trend, Trend::Improving);

        let unknown = mood_trend(&["Meh", "Meh", "Meh", "Meh"]);
        assert_eq!(unknown.trend, Trend::Stable);
    }
}
