//! Rule-based chat replies
//!
//! Custom patterns from the agent state are checked first, in insertion
//! order. Without a match, a fixed ladder of keyword rules applies.

use crate::state::AgentState;
use rand::seq::IndexedRandom;
use rand::Rng;

pub const OPENING_TIPS: [&str; 3] = [
    "The Italian Game is great for beginners! 1.e4 e5 2.Nf3 Nc6 3.Bc4",
    "The Sicilian Defense creates unbalanced positions. 1.e4 c5",
    "The Queen's Gambit is a classic: 1.d4 d5 2.c4",
];

pub const TACTIC_TIPS: [&str; 3] = [
    "Always look for checks, captures, and threats in that order!",
    "Forks are powerful - one piece attacking two enemy pieces.",
    "Pins can immobilize important enemy pieces.",
];

pub const ENCOURAGEMENTS: [&str; 5] = [
    "That's interesting! Consider controlling the center squares.",
    "Good thinking! What's your plan for the next few moves?",
    "Nice move! Pattern recognition is key in chess.",
    "I'm learning from our games. Your style is becoming familiar!",
    "Remember: development, center control, and king safety are important.",
];

pub const HELP_REPLY: &str =
    "I can help you improve! Try asking me about tactics, openings, or specific positions.";

fn pick<R: Rng + ?Sized>(options: &[&str], rng: &mut R) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// Reply from the custom pattern table, if any pattern occurs in `lowered`
fn custom_reply<R: Rng + ?Sized>(state: &AgentState, lowered: &str, rng: &mut R) -> Option<String> {
    state
        .chat_patterns
        .iter()
        .filter(|(_, replies)| !replies.is_empty())
        .find(|(pattern, _)| lowered.contains(pattern.to_lowercase().as_str()))
        .and_then(|(_, replies)| replies.choose(rng).cloned())
}

pub fn reply<R: Rng + ?Sized>(state: &AgentState, message: &str, rng: &mut R) -> String {
    let lowered = message.to_lowercase();

    if let Some(custom) = custom_reply(state, &lowered, rng) {
        return custom;
    }

    let has = |word: &str| lowered.contains(word);

    if has("hello") || has("hi") {
        format!(
            "Hello! I've learned from {} games so far. Ready to play?",
            state.games_played
        )
    } else if has("help") {
        HELP_REPLY.to_string()
    } else if has("opening") {
        pick(&OPENING_TIPS, rng)
    } else if has("tactic") {
        pick(&TACTIC_TIPS, rng)
    } else if has("difficulty") {
        format!(
            "My current difficulty is {}. I adjust it based on our games!",
            state.difficulty
        )
    } else if has("learn") {
        format!(
            "I've learned from {} games. The more we play, the better I get!",
            state.games_played
        )
    } else {
        pick(&ENCOURAGEMENTS, rng)
    }
}
