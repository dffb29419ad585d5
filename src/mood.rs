const RULES: &[(&[&str], &str)] = &[
    (&["happy", "joy", "excited"], "#10b981"),
    (&["sad", "depressed", "melancholy"], "#3b82f6"),
    (&["angry", "frustrated", "irritated"], "#ef4444"),
    (&["anxious", "worried", "nervous"], "#f59e0b"),
    // analysis failures come back as pseudo-moods
    (&["quota_exceeded", "error"], "#ef4444"),
];

const NEUTRAL: &str = "#6b7280";

pub fn mood_color(mood: &str) -> &'static str {
    let mood = mood.to_lowercase();
    RULES
        .iter()
        .find(|(words, _)| words.iter().any(|word| mood.contains(word)))
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL)
}
