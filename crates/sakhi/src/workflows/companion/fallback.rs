/// Checked in order; the first keyword found anywhere in the message wins.
const KEYWORD_REPLIES: [(&str, &str); 6] = [
    (
        "diet",
        "For PCOS management, focus on a low-GI diet with plenty of vegetables, lean proteins, and healthy fats. Include foods like leafy greens, berries, nuts, seeds, and whole grains. Avoid refined carbs and sugary foods. 🥗",
    ),
    (
        "exercise",
        "Regular exercise is crucial! Aim for 150 minutes of moderate activity per week. A mix of cardio (like brisk walking), strength training, and yoga works best for PCOS. Start small and be consistent! 💪",
    ),
    (
        "symptoms",
        "Common PCOS symptoms include irregular periods, weight gain, acne, and excess hair growth. These can be managed through lifestyle changes, medication, and stress management. Which symptom concerns you most?",
    ),
    (
        "weight",
        "Weight management with PCOS can be challenging but not impossible! Focus on consistent exercise, balanced meals every 3-4 hours, adequate sleep, and stress management. Small, sustainable changes work best. 🌟",
    ),
    (
        "period",
        "Period irregularity is common with PCOS. Tracking your cycle helps identify patterns. Regular exercise, maintaining healthy weight, and managing stress can help regulate periods. Consult your doctor if periods are absent for 3+ months.",
    ),
    (
        "mood",
        "PCOS can affect mood due to hormonal imbalances. Practice stress management through yoga, meditation, adequate sleep (7-8 hours), and talking to supportive people. Don't hesitate to seek professional help if needed. 🧘‍♀️",
    ),
];

const DEFAULT_REPLY: &str = "I understand your concern about PCOS. As your companion, I'm here to help with diet advice, exercise routines, symptom management, and emotional support. What specific aspect would you like to discuss? 🌸";

/// Canned answer used whenever the remote model is unavailable.
pub fn fallback_reply(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(fallback_reply("What DIET should I follow?").starts_with("For PCOS management"));
    }

    #[test]
    fn earlier_keywords_take_precedence() {
        // both "weight" and "diet" appear; diet is checked first
        let reply = fallback_reply("weight loss diet tips");
        assert_eq!(reply, KEYWORD_REPLIES[0].1);
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        assert_eq!(fallback_reply("my periods are late"), KEYWORD_REPLIES[4].1);
    }

    #[test]
    fn unmatched_messages_get_the_default() {
        assert_eq!(fallback_reply("hello there"), DEFAULT_REPLY);
        assert_eq!(fallback_reply(""), DEFAULT_REPLY);
    }
}
