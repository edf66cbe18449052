//! Board helpers on top of the `shakmaty` rules crate
//!
//! Position keys, move notation and parsing of caller-supplied strings.
//! Rules themselves (legality, check, move generation) stay in `shakmaty`.

use crate::error::{BrainError, BrainResult};
use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::uci::Uci;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a playable position
pub fn parse_fen(fen: &str) -> BrainResult<Chess> {
    let invalid = |reason: String| BrainError::InvalidPosition {
        fen: fen.to_string(),
        reason,
    };

    let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| invalid(format!("{}", e)))
}

/// Canonical key for a position (its FEN, en passant only when capturable)
pub fn position_key(pos: &Chess) -> String {
    Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string()
}

/// Stored notation for a move
pub fn uci_notation(m: &Move) -> String {
    m.to_uci(CastlingMode::Standard).to_string()
}

pub fn san_notation(pos: &Chess, m: &Move) -> String {
    San::from_move(pos, m).to_string()
}

/// Resolve a move string against `pos`. SAN is tried first, then UCI.
pub fn resolve_move(pos: &Chess, notation: &str) -> Option<Move> {
    let notation = notation.trim();

    if let Ok(san) = notation.parse::<SanPlus>() {
        if let Ok(m) = san.san.to_move(pos) {
            return Some(m);
        }
    }

    notation
        .parse::<Uci>()
        .ok()
        .and_then(|uci| uci.to_move(pos).ok())
}

/// Position after `m`, leaving `pos` as it was
pub fn after_move(pos: &Chess, m: &Move) -> Chess {
    let mut next = pos.clone();
    next.play_unchecked(m);
    next
}
