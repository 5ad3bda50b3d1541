//! Keyword-counting sentiment for journal entries and chat messages, plus
//! aggregate trends over entry and mood histories.

mod lexicon;

pub mod analyzer;
pub mod trend;

pub use analyzer::{
    analyze_sentiment, DisplayTags, IntensifierScope, SentimentAnalyzer, SentimentLabel,
    SentimentScore,
};
pub use trend::{mood_score, mood_trend, summarize_sentiment, MoodTrend, SentimentSummary, Trend};
