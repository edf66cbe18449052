//! Static position evaluation
//!
//! A linear heuristic from White's point of view:
//! - Material count (pawn 1, knight 3, bishop 3, rook 5, queen 9)
//! - Mobility of the side to move (0.1 per legal move)
//! - Check penalty for the side to move (0.5)
//!
//! Terms for the side to move are signed by colour, so a position and its
//! colour mirror evaluate to opposite scores.

use shakmaty::{Chess, Color, Position, Role};

/// Piece values in pawns; the king is not counted
const PIECE_VALUES: [(Role, f64); 6] = [
    (Role::Pawn, 1.0),
    (Role::Knight, 3.0),
    (Role::Bishop, 3.0),
    (Role::Rook, 5.0),
    (Role::Queen, 9.0),
    (Role::King, 0.0),
];

const MOBILITY_WEIGHT: f64 = 0.1;
const CHECK_PENALTY: f64 = 0.5;

/// Evaluate material balance (White minus Black)
pub fn evaluate_material(pos: &Chess) -> f64 {
    let board = pos.board();
    PIECE_VALUES
        .iter()
        .map(|&(role, value)| {
            let pieces = board.by_role(role);
            let white = (pieces & board.by_color(Color::White)).count() as f64;
            let black = (pieces & board.by_color(Color::Black)).count() as f64;
            (white - black) * value
        })
        .sum()
}

/// Evaluate full position (material + mobility + check)
pub fn evaluate(pos: &Chess) -> f64 {
    let mut score = evaluate_material(pos);
    let mobility = pos.legal_moves().len() as f64 * MOBILITY_WEIGHT;

    match pos.turn() {
        Color::White => {
            score += mobility;
            if pos.is_check() {
                score -= CHECK_PENALTY;
            }
        }
        Color::Black => {
            score -= mobility;
            if pos.is_check() {
                score += CHECK_PENALTY;
            }
        }
    }

    score
}
