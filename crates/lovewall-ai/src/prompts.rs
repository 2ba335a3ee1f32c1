//! Prompt templates, role instructions, and fallback texts.

pub const NOTE_INSTRUCTION: &str = "You are a professional romantic writer. Your goal is to write \
     sweet, authentic, and modern love notes for couples to share on their virtual wall.";

pub const ADVICE_INSTRUCTION: &str = "You are a supportive relationship coach.";

/// Used when a note suggestion comes back empty.
pub const NOTE_EMPTY_FALLBACK: &str = "You make my world brighter every single day. Love you!";
/// Used when a note suggestion request fails.
pub const NOTE_ERROR_FALLBACK: &str = "Thinking of you always ❤️";
/// Used when a relationship tip comes back empty.
pub const ADVICE_EMPTY_FALLBACK: &str = "Try sending a spontaneous sweet text today!";
/// Used when a relationship tip request fails.
pub const ADVICE_ERROR_FALLBACK: &str = "Little gestures often mean the most.";

pub fn sweet_note_prompt(mood: &str) -> String {
    format!(
        "Generate a short, heartfelt romantic note for a partner based on this mood/context: \
         \"{mood}\". Keep it under 150 characters. Do not use quotes around the response."
    )
}

pub fn advice_prompt(history: &str) -> String {
    format!(
        "Given this interaction history: \"{history}\", provide a very brief, 1-sentence tip \
         to keep the romance alive today."
    )
}

pub fn image_prompt(scene: &str) -> String {
    format!(
        "A dreamy, romantic illustration representing: {scene}. Soft warm colors, watercolor \
         or artistic style, cozy atmosphere, focus on emotion and love."
    )
}

/// History line sent when a pairing starts.
pub fn pairing_history(user_name: &str, partner_name: &str) -> String {
    format!("{user_name} is now interacting with {partner_name}. Keep it sweet!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_input() {
        assert!(sweet_note_prompt("rainy sunday").contains("\"rainy sunday\""));
        assert!(advice_prompt("we argued").contains("\"we argued\""));
        assert!(image_prompt("picnic").starts_with("A dreamy, romantic illustration representing: picnic."));
    }

    #[test]
    fn pairing_history_names_both() {
        assert_eq!(
            pairing_history("Alex", "Sam"),
            "Alex is now interacting with Sam. Keep it sweet!"
        );
    }
}
