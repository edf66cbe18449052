//! Snapshot persistence
//!
//! Saves and loads [`AgentState`] to/from a single JSON file.
//!
//! # Error Handling
//!
//! - Load failures (missing, unreadable or malformed file) fall back to the
//!   default state and are logged; they never reach callers.
//! - Save failures are returned so the triggering operation can report them.
//!   The in-memory state is left untouched either way.

use crate::error::BrainResult;
use crate::state::{AgentState, HISTORY_CAP};
use crate::types::{Difficulty, GameRecord, MoveStats, Personality};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Default snapshot filename
pub const SNAPSHOT_FILENAME: &str = "ai_brain.json";

/// On-disk layout written by [`SnapshotStore::save`]
///
/// Borrows from the live state; history is already capped.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    games_played: u64,
    move_history: &'a [GameRecord],
    position_memory: &'a HashMap<String, HashMap<String, MoveStats>>,
    chat_patterns: &'a IndexMap<String, Vec<String>>,
    personality: Personality,
    difficulty: Difficulty,
    learning_rate: f64,
    last_updated: DateTime<Utc>,
}

/// Location of the snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or the default state if that is not possible
    pub fn load(&self) -> AgentState {
        if !self.path.exists() {
            info!(
                "[BRAIN] No snapshot found at {:?}. Starting with a fresh brain.",
                self.path
            );
            return AgentState::default();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "[BRAIN] Failed to read snapshot at {:?}: {}. Using defaults.",
                    self.path, e
                );
                return AgentState::default();
            }
        };

        match serde_json::from_str::<AgentState>(&contents) {
            Ok(state) => {
                info!(
                    "[BRAIN] Loaded snapshot from {:?}: {} games played, {} positions",
                    self.path,
                    state.games_played,
                    state.position_memory.len()
                );
                state
            }
            Err(e) => {
                warn!(
                    "[BRAIN] Failed to parse snapshot at {:?}: {}. Using defaults.",
                    self.path, e
                );
                AgentState::default()
            }
        }
    }

    /// Overwrite the snapshot with `state`, keeping only the newest history.
    ///
    /// Written to a temporary file next to the snapshot and renamed over it,
    /// so a failed save leaves the previous snapshot intact.
    pub fn save(&self, state: &AgentState) -> BrainResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let history_start = state.move_history.len().saturating_sub(HISTORY_CAP);
        let snapshot = SnapshotRef {
            games_played: state.games_played,
            move_history: &state.move_history[history_start..],
            position_memory: &state.position_memory,
            chat_patterns: &state.chat_patterns,
            personality: state.personality,
            difficulty: state.difficulty,
            learning_rate: state.learning_rate,
            last_updated: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        debug!("[BRAIN] Saved snapshot to {:?}", self.path);
        Ok(())
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(SNAPSHOT_FILENAME)
    }
}
