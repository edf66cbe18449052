//! Position-memory learning agent for the chess coach backend
//!
//! Suggests moves from a small linear evaluation, remembers which moves it
//! played in won and lost games, answers chat with fixed rules, and keeps
//! all of that in a JSON snapshot. Chess rules come from `shakmaty`.
//!
//! ## Module Organization
//!
//! - `agent` - The [`LearningAgent`] façade used by the request layer
//! - `state` - In-memory state / snapshot layout
//! - `persistence` - Snapshot load and save
//! - `evaluation` - Static position evaluation
//! - `selection` - Move selection (learned moves, then evaluation)
//! - `learning` - Game replay, outcome counters, difficulty review
//! - `chat` - Rule-based chat replies
//! - `position` - FEN and move notation helpers

pub mod agent;
pub mod chat;
pub mod error;
pub mod evaluation;
pub mod learning;
pub mod persistence;
pub mod position;
pub mod selection;
pub mod state;
pub mod types;

pub use agent::LearningAgent;
pub use error::{BrainError, BrainResult};
pub use persistence::SnapshotStore;
pub use state::AgentState;
pub use types::{
    AgentStatus, ChatReply, Difficulty, GameData, GameRecord, GameResult, LearnOutcome,
    MoveStats, MoveSuggestion, Personality, StatsReport,
};
