//! Shared value types for the learning agent
//!
//! Everything in here is plain data: settings enums, per-move outcome
//! counters, game records, and the shapes returned to the request layer.

use crate::error::BrainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style modifier applied when scoring candidate moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Balanced,
    /// Bonus for captures
    Aggressive,
    /// Small random perturbation on every move
    Defensive,
}

impl Personality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Balanced => "balanced",
            Personality::Aggressive => "aggressive",
            Personality::Defensive => "defensive",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Personality {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Personality::Balanced),
            "aggressive" => Ok(Personality::Aggressive),
            "defensive" => Ok(Personality::Defensive),
            other => Err(BrainError::InvalidSetting {
                kind: "personality",
                value: other.to_string(),
            }),
        }
    }
}

/// Reported playing tier
///
/// Variants are declared in ascending order so the derived `Ord` matches the
/// adjustment ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const LADDER: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// One step up, saturating at `Expert`
    pub fn step_up(self) -> Self {
        Self::LADDER[(self.index() + 1).min(Self::LADDER.len() - 1)]
    }

    /// One step down, saturating at `Beginner`
    pub fn step_down(self) -> Self {
        Self::LADDER[self.index().saturating_sub(1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LADDER
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| BrainError::InvalidSetting {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}

/// Outcome label of a finished game, from the agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    AiWin,
    PlayerWin,
    Draw,
    /// Missing or unrecognised labels land here
    #[default]
    #[serde(other)]
    Unknown,
}

/// Outcome counters for one (position, move) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveStats {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
}

impl MoveStats {
    /// Count one game with the given result. `Unknown` counts nothing.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::AiWin => self.wins += 1,
            GameResult::PlayerWin => self.losses += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Unknown => {}
        }
    }
}

/// One finished game as kept in the move history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub game_id: String,
    /// Moves exactly as submitted
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub result: GameResult,
    #[serde(default, with = "crate::state::timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Game data submitted for learning; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub moves: Option<Vec<String>>,
    #[serde(default)]
    pub result: Option<GameResult>,
}

/// Result of a successful learning update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearnOutcome {
    pub status: &'static str,
    pub games_learned: u64,
    pub current_difficulty: Difficulty,
}

/// Move chosen for a request, with the position after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveSuggestion {
    /// UCI notation
    #[serde(rename = "move")]
    pub notation: String,
    pub fen: String,
    pub evaluation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentStatus {
    pub games_played: u64,
    pub difficulty: Difficulty,
    pub personality: Personality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub games_learned: u64,
}

/// Aggregate view of what the agent has learned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub games_played: u64,
    pub difficulty: Difficulty,
    pub personality: Personality,
    pub positions_learned: usize,
    pub recent_results: Vec<GameRecord>,
}
