use serde::{Deserialize, Serialize};

use super::lexicon::{is_intensifier, is_negative, is_positive, is_symptom};

const INTENSIFIER_WEIGHT: f64 = 1.5;
const SYMPTOM_WEIGHT: f64 = 0.3;

/// Ordinal polarity classes, strongest positive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// Bands a polarity score; each lower bound is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.6 {
            SentimentLabel::VeryPositive
        } else if score >= 0.2 {
            SentimentLabel::Positive
        } else if score >= -0.2 {
            SentimentLabel::Neutral
        } else if score >= -0.6 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very_positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very_negative",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "😊",
            SentimentLabel::Positive => "🙂",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Negative => "😔",
            SentimentLabel::VeryNegative => "😢",
        }
    }

    pub fn tags(self) -> DisplayTags {
        let (color, bg_color) = match self {
            SentimentLabel::VeryPositive => ("text-green-600", "bg-green-50"),
            SentimentLabel::Positive => ("text-green-500", "bg-green-50"),
            SentimentLabel::Neutral => ("text-gray-600", "bg-gray-50"),
            SentimentLabel::Negative => ("text-orange-600", "bg-orange-50"),
            SentimentLabel::VeryNegative => ("text-red-600", "bg-red-50"),
        };
        DisplayTags {
            emoji: self.emoji().to_string(),
            color: color.to_string(),
            bg_color: bg_color.to_string(),
        }
    }
}

/// Opaque presentation hints; only the label/score/magnitude carry meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTags {
    pub emoji: String,
    pub color: String,
    pub bg_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1 (very negative) ..= 1 (very positive).
    pub score: f64,
    /// Share of the text carrying emotional signal, 0..=1.
    pub magnitude: f64,
    pub label: SentimentLabel,
    pub tags: DisplayTags,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self::from_parts(0.0, 0.0)
    }

    fn from_parts(score: f64, magnitude: f64) -> Self {
        let label = SentimentLabel::from_score(score);
        Self {
            score,
            magnitude,
            label,
            tags: label.tags(),
        }
    }
}

/// How far an intensifier reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensifierScope {
    /// Armed until the next positive or negative match, however many tokens later.
    #[default]
    Pending,
    /// Only the token directly after the intensifier can be amplified.
    Adjacent,
}

/// Keyword-counting sentiment heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer {
    scope: IntensifierScope,
}

impl SentimentAnalyzer {
    pub fn new(scope: IntensifierScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> IntensifierScope {
        self.scope
    }

    pub fn analyze(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return SentimentScore::neutral();
        }

        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut symptoms = 0.0;
        let mut multiplier = 1.0;
        let mut armed_by_previous = false;

        for (index, token) in tokens.iter().enumerate() {
            if self.scope == IntensifierScope::Adjacent && !armed_by_previous {
                multiplier = 1.0;
            }
            armed_by_previous = false;

            if is_intensifier(token) && index + 1 < tokens.len() {
                multiplier = INTENSIFIER_WEIGHT;
                armed_by_previous = true;
            }

            if is_positive(token) {
                positive += multiplier;
                multiplier = 1.0;
            }

            if is_negative(token) {
                negative += multiplier;
                multiplier = 1.0;
            }

            if is_symptom(token) {
                symptoms += SYMPTOM_WEIGHT;
            }
        }

        negative += symptoms;

        let total = positive + negative;
        let score = if total > 0.0 {
            (positive - negative) / total
        } else {
            0.0
        };
        let magnitude = (total / tokens.len() as f64).min(1.0);

        SentimentScore::from_parts(score, magnitude)
    }
}

/// Scores `text` with the default (pending) intensifier scope.
pub fn analyze_sentiment(text: &str) -> SentimentScore {
    SentimentAnalyzer::default().analyze(text)
}
