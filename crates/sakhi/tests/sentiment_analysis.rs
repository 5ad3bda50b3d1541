use sakhi::workflows::sentiment::{
    analyze_sentiment, summarize_sentiment, IntensifierScope, SentimentAnalyzer, SentimentLabel,
    Trend,
};

#[test]
fn empty_text_is_neutral() {
    let result = analyze_sentiment("");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.magnitude, 0.0);
    assert_eq!(result.label, SentimentLabel::Neutral);
}

#[test]
fn intensified_positive_text_reads_positive() {
    let label = analyze_sentiment("I am very happy and healthy").label;
    assert!(matches!(
        label,
        SentimentLabel::Positive | SentimentLabel::VeryPositive
    ));
}

#[test]
fn sad_tired_pain_reads_negative() {
    let label = analyze_sentiment("I am very sad and tired and in pain").label;
    assert!(matches!(
        label,
        SentimentLabel::Negative | SentimentLabel::VeryNegative
    ));
}

#[test]
fn results_stay_in_range_for_mixed_text() {
    let samples = [
        "Feeling GREAT today but cramps again",
        "so so so tired",
        "extremely anxious, slightly hopeful",
        "🌸🌸🌸",
        "period came early; bloating and acne but I'm proud of my progress",
    ];
    for scope in [IntensifierScope::Pending, IntensifierScope::Adjacent] {
        let analyzer = SentimentAnalyzer::new(scope);
        for sample in samples {
            let result = analyzer.analyze(sample);
            assert!((-1.0..=1.0).contains(&result.score), "{sample}");
            assert!((0.0..=1.0).contains(&result.magnitude), "{sample}");
            assert_eq!(result.label, SentimentLabel::from_score(result.score));
        }
    }
}

#[test]
fn journal_summary_tracks_a_declining_week() {
    let journal = [
        "Wonderful morning walk, feeling energetic",
        "Good day, calm and relaxed",
        "Tired and bloated",
        "Awful cramps, so frustrated",
    ];
    let summary = summarize_sentiment(&journal);
    assert_eq!(summary.trend, Trend::Declining);
    assert!(summary.average_score.abs() <= 1.0);
}

#[test]
fn surrounding_whitespace_adds_no_tokens() {
    let padded = analyze_sentiment("  happy \n");
    let bare = analyze_sentiment("happy");

    assert_eq!(padded, bare);
    assert_eq!(padded.magnitude, 1.0);
    assert_eq!(analyze_sentiment(" \t\n").label, SentimentLabel::Neutral);
}
