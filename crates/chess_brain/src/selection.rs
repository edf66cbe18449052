//! Move selection
//!
//! Learned moves for the current position win outright. Otherwise every
//! legal move is scored with [`evaluate`] on the resulting position, adjusted
//! by personality, and the strictly best one is kept (earlier moves win ties).

use crate::evaluation::evaluate;
use crate::position::{after_move, position_key, san_notation, uci_notation};
use crate::state::AgentState;
use crate::types::Personality;
use rand::Rng;
use shakmaty::{Chess, Move, Position};
use tracing::debug;

/// Personality bonus for a move. Draws from `rng` only when a bonus applies.
fn personality_bonus<R: Rng + ?Sized>(personality: Personality, m: &Move, rng: &mut R) -> f64 {
    match personality {
        Personality::Aggressive if m.is_capture() => rng.random_range(0.3..=0.8),
        Personality::Aggressive | Personality::Balanced => 0.0,
        Personality::Defensive => rng.random_range(-0.2..=0.2),
    }
}

/// First legal move (in generation order) that the position memory knows.
///
/// Memory keys are UCI; SAN keys from older snapshots also match.
pub fn learned_move(state: &AgentState, pos: &Chess) -> Option<Move> {
    let known = state.learned_moves(&position_key(pos))?;
    pos.legal_moves().into_iter().find(|m| {
        known.contains_key(&uci_notation(m)) || known.contains_key(&san_notation(pos, m))
    })
}

/// Pick a move for the side to move, or `None` when there is no legal move
pub fn select_move<R: Rng + ?Sized>(state: &AgentState, pos: &Chess, rng: &mut R) -> Option<Move> {
    let legal = pos.legal_moves();
    if legal.is_empty() {
        return None;
    }

    if let Some(m) = learned_move(state, pos) {
        debug!("[BRAIN] Playing learned move {}", uci_notation(&m));
        return Some(m);
    }

    let mut best: Option<(Move, f64)> = None;
    for m in legal {
        let score = evaluate(&after_move(pos, &m)) + personality_bonus(state.personality, &m, rng);
        let improves = best
            .as_ref()
            .map_or(true, |(_, best_score)| score > *best_score);
        if improves {
            best = Some((m, score));
        }
    }

    best.map(|(m, _)| m)
}
