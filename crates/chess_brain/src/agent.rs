//! The learning agent
//!
//! Owns the [`AgentState`] and the [`SnapshotStore`] it persists to. The
//! surrounding service decides when the agent is created, shared and
//! flushed; the agent only saves after a learning update.

use crate::chat;
use crate::error::{BrainError, BrainResult};
use crate::evaluation::evaluate;
use crate::learning;
use crate::persistence::SnapshotStore;
use crate::position::{after_move, parse_fen, position_key, uci_notation};
use crate::selection::select_move;
use crate::state::AgentState;
use crate::types::{
    AgentStatus, ChatReply, Difficulty, GameData, LearnOutcome, MoveSuggestion, Personality,
    StatsReport,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{error, info};

/// Number of history records included in stats
pub const RECENT_RESULTS: usize = 5;

#[derive(Debug)]
pub struct LearningAgent {
    state: AgentState,
    store: SnapshotStore,
}

impl LearningAgent {
    /// Load the agent from its snapshot, falling back to a fresh state
    pub fn load(store: SnapshotStore) -> Self {
        let state = store.load();
        Self { state, store }
    }

    pub fn with_state(state: AgentState, store: SnapshotStore) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            games_played: self.state.games_played,
            difficulty: self.state.difficulty,
            personality: self.state.personality,
        }
    }

    /// Choose a move for `fen`.
    ///
    /// The requested personality and difficulty are stored on the agent
    /// before the position is looked at, even if the position turns out to
    /// be invalid.
    pub fn request_move<R: Rng + ?Sized>(
        &mut self,
        fen: &str,
        personality: Personality,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> BrainResult<MoveSuggestion> {
        self.state.personality = personality;
        self.state.difficulty = difficulty;

        let pos = parse_fen(fen)?;
        let chosen = select_move(&self.state, &pos, rng).ok_or(BrainError::NoLegalMoves)?;
        let next = after_move(&pos, &chosen);

        Ok(MoveSuggestion {
            notation: uci_notation(&chosen),
            fen: position_key(&next),
            evaluation: evaluate(&next),
        })
    }

    pub fn chat<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ChatReply {
        ChatReply {
            response: chat::reply(&self.state, message, rng),
            games_learned: self.state.games_played,
        }
    }

    /// Learn from a finished game and persist.
    ///
    /// A failed save is returned, but what was learned stays in memory.
    pub fn submit_learning(&mut self, game: GameData) -> BrainResult<LearnOutcome> {
        self.submit_learning_at(game, Utc::now())
    }

    pub fn submit_learning_at(
        &mut self,
        game: GameData,
        now: DateTime<Utc>,
    ) -> BrainResult<LearnOutcome> {
        let current_difficulty = learning::learn_from_game(&mut self.state, game, now);

        if let Err(e) = self.store.save(&self.state) {
            error!(
                "[BRAIN] Failed to save snapshot to {:?}: {}",
                self.store.path(),
                e
            );
            return Err(e);
        }

        info!(
            "[BRAIN] Learned game {} ({} positions known)",
            self.state.games_played,
            self.state.position_memory.len()
        );

        Ok(LearnOutcome {
            status: "success",
            games_learned: self.state.games_played,
            current_difficulty,
        })
    }

    pub fn stats(&self) -> StatsReport {
        StatsReport {
            games_played: self.state.games_played,
            difficulty: self.state.difficulty,
            personality: self.state.personality,
            positions_learned: self.state.position_memory.len(),
            recent_results: self.state.recent_games(RECENT_RESULTS).to_vec(),
        }
    }

    /// Write the current state out, e.g. on shutdown
    pub fn flush(&self) -> BrainResult<()> {
        self.store.save(&self.state)
    }
}
