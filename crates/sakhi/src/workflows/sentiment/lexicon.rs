//! Curated word lists. Matching is substring containment on lowercased tokens,
//! except intensifiers which must match a whole token.

pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "happy", "good", "great", "excellent", "wonderful", "amazing", "fantastic", "love", "joy",
    "excited", "energetic", "motivated", "confident", "strong", "healthy", "better", "improved",
    "progress", "success", "relief", "comfortable", "calm", "peaceful", "grateful", "blessed",
    "hopeful", "optimistic", "positive", "proud",
    // Hindi transliterations
    "khush", "achha", "behtar", "accha", "badhiya",
];

pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "awful", "horrible", "hate", "angry", "frustrated", "tired",
    "exhausted", "weak", "pain", "hurt", "ache", "sick", "ill", "worse", "difficult", "hard",
    "struggle", "suffer", "depressed", "anxious", "worried", "stressed", "overwhelmed",
    "hopeless", "scared", "afraid", "upset", "crying", "bloated", "cramps", "fatigue", "nausea",
    "headache", "migraine", "acne",
    // Hindi transliterations
    "dukhi", "bura", "dard", "thaka", "pareshan",
];

pub(crate) const SYMPTOM_WORDS: &[&str] = &[
    "irregular", "period", "menstrual", "cycle", "cramps", "bloating", "acne", "hair", "weight",
    "gain", "loss", "insulin", "hormone", "ovulation", "fertility", "hirsutism", "pcos",
    "polycystic", "cyst", "ovary",
];

pub(crate) const INTENSIFIERS: &[&str] = &[
    "very", "extremely", "really", "so", "too", "quite", "absolutely", "completely", "totally",
    "highly", "severely", "badly", "seriously", "incredibly",
];

pub(crate) fn is_positive(token: &str) -> bool {
    contains_any(token, POSITIVE_WORDS)
}

pub(crate) fn is_negative(token: &str) -> bool {
    contains_any(token, NEGATIVE_WORDS)
}

pub(crate) fn is_symptom(token: &str) -> bool {
    contains_any(token, SYMPTOM_WORDS)
}

pub(crate) fn is_intensifier(token: &str) -> bool {
    INTENSIFIERS.contains(&token)
}

fn contains_any(token: &str, words: &[&str]) -> bool {
    words.iter().any(|word| token.contains(word))
}
