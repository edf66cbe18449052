//! In-memory agent state and its snapshot shape
//!
//! [`AgentState`] is both the live state and the JSON snapshot layout.
//! Every field carries a serde default so that older or partial snapshots
//! still load; see [`crate::persistence`] for the load/save policy.

use crate::types::{Difficulty, GameRecord, MoveStats, Personality};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of history records kept when the state is written out
pub const HISTORY_CAP: usize = 50;

/// Move notation -> outcome counters for a single position
pub type MoveTable = HashMap<String, MoveStats>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    #[serde(default)]
    pub games_played: u64,
    /// Newest last
    #[serde(default)]
    pub move_history: Vec<GameRecord>,
    /// FEN -> learned moves
    #[serde(default)]
    pub position_memory: HashMap<String, MoveTable>,
    /// Substring pattern -> candidate replies, matched in insertion order
    #[serde(default)]
    pub chat_patterns: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub personality: Personality,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Not used by any operation yet
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

fn default_learning_rate() -> f64 {
    0.1
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            games_played: 0,
            move_history: Vec::new(),
            position_memory: HashMap::new(),
            chat_patterns: IndexMap::new(),
            personality: Personality::default(),
            difficulty: Difficulty::default(),
            learning_rate: default_learning_rate(),
        }
    }
}

impl AgentState {
    /// The last `n` history records, oldest first
    pub fn recent_games(&self, n: usize) -> &[GameRecord] {
        let start = self.move_history.len().saturating_sub(n);
        &self.move_history[start..]
    }

    /// Learned moves for a position, if any
    pub fn learned_moves(&self, position_key: &str) -> Option<&MoveTable> {
        self.position_memory.get(position_key)
    }
}

/// Serde adapter for history timestamps.
///
/// Writes RFC 3339. Reads RFC 3339, and also naive ISO-8601 timestamps
/// (no offset), which are taken as UTC.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(crate) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp '{}': {}", raw, e))
    }
}
