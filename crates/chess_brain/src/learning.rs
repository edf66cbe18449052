//! Learning from finished games
//!
//! A submitted game is appended to the history and replayed from the
//! standard start position. Moves at even indices (the side that moved
//! first, which is the agent by convention) update the outcome counters of
//! the position they were played from. The first move that does not resolve
//! on the replayed board is counted under its raw notation if it is an
//! agent move, then ends the replay; the game itself is still counted.

use crate::error::BrainError;
use crate::position::{after_move, position_key, resolve_move, uci_notation};
use crate::state::AgentState;
use crate::types::{Difficulty, GameData, GameRecord, GameResult};
use chrono::{DateTime, Utc};
use shakmaty::{Chess, Move};
use tracing::{debug, info};

/// Games between difficulty reviews
pub const REVIEW_INTERVAL: u64 = 5;

/// Outcome of feeding one move to the replayed board
#[derive(Debug)]
pub enum ReplayStep {
    /// Move was legal; holds the position it was played from
    Applied { from: Chess, played: Move },
    /// Move did not resolve; replay stops here
    Rejected(BrainError),
}

fn replay_step(pos: &Chess, index: usize, notation: &str) -> ReplayStep {
    match resolve_move(pos, notation) {
        Some(played) => ReplayStep::Applied {
            from: pos.clone(),
            played,
        },
        None => ReplayStep::Rejected(BrainError::MalformedGameRecord {
            index,
            notation: notation.to_string(),
        }),
    }
}

fn count_move(state: &mut AgentState, position: String, notation: String, result: GameResult) {
    state
        .position_memory
        .entry(position)
        .or_default()
        .entry(notation)
        .or_default()
        .record(result);
}

/// Replay `moves` and count `result` against every agent-side move.
///
/// An agent-side move that does not resolve is still counted, under its
/// submitted notation, before the replay stops. Returns the number of moves
/// that were applied.
pub fn record_outcomes(state: &mut AgentState, moves: &[String], result: GameResult) -> usize {
    let mut pos = Chess::default();
    let mut applied = 0;

    for (index, notation) in moves.iter().enumerate() {
        let agent_move = index % 2 == 0;
        let (from, played) = match replay_step(&pos, index, notation) {
            ReplayStep::Applied { from, played } => (from, played),
            ReplayStep::Rejected(reason) => {
                if agent_move {
                    count_move(state, position_key(&pos), notation.trim().to_string(), result);
                }
                debug!("[BRAIN] Stopping replay: {}", reason);
                break;
            }
        };

        if agent_move {
            count_move(state, position_key(&from), uci_notation(&played), result);
        }

        pos = after_move(&from, &played);
        applied += 1;
    }

    applied
}

/// Review the last five games when the game count hits a review point.
///
/// Four or five wins step difficulty up, no wins step it down.
pub fn adjust_difficulty(state: &mut AgentState) {
    if state.games_played == 0 || state.games_played % REVIEW_INTERVAL != 0 {
        return;
    }

    let wins = state
        .recent_games(REVIEW_INTERVAL as usize)
        .iter()
        .filter(|game| game.result == GameResult::AiWin)
        .count();

    let before = state.difficulty;
    state.difficulty = match wins {
        4 | 5 => before.step_up(),
        0 => before.step_down(),
        _ => before,
    };

    if state.difficulty != before {
        info!(
            "[BRAIN] Difficulty {} -> {} after {} wins in the last {} games",
            before, state.difficulty, wins, REVIEW_INTERVAL
        );
    }
}

/// Count a finished game and learn from its moves. Does not persist.
pub fn learn_from_game(state: &mut AgentState, game: GameData, now: DateTime<Utc>) -> Difficulty {
    state.games_played += 1;

    let record = GameRecord {
        game_id: game
            .game_id
            .unwrap_or_else(|| format!("game_{}", state.games_played)),
        moves: game.moves.unwrap_or_default(),
        result: game.result.unwrap_or_default(),
        timestamp: now,
    };

    let applied = record_outcomes(state, &record.moves, record.result);
    debug!(
        "[BRAIN] Learned from {} ({} of {} moves replayed, result {:?})",
        record.game_id,
        applied,
        record.moves.len(),
        record.result
    );

    state.move_history.push(record);
    adjust_difficulty(state);
    state.difficulty
}
