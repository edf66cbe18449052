//! Error types for the learning agent
//!
//! Covers caller input validation (positions, personality and difficulty
//! names), terminal positions, and snapshot persistence.

use thiserror::Error;

/// Errors that can occur in the learning agent
#[derive(Error, Debug)]
pub enum BrainError {
    /// Position string could not be parsed or is not a legal setup
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// Move selection requested on a position without legal moves
    #[error("No legal moves available")]
    NoLegalMoves,

    /// Unknown personality or difficulty name
    #[error("Invalid {kind}: {value}")]
    InvalidSetting { kind: &'static str, value: String },

    /// A move in a submitted game could not be played on the replayed board
    #[error("Malformed game record: move {index} ('{notation}') is not legal here")]
    MalformedGameRecord { index: usize, notation: String },

    /// Snapshot file I/O error
    #[error("Snapshot I/O error: {0}")]
    PersistenceIo(#[from] std::io::Error),

    /// Snapshot serialization error
    #[error("Snapshot serialization error: {0}")]
    PersistenceSerialization(#[from] serde_json::Error),
}

impl BrainError {
    /// True for errors caused by the caller's request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BrainError::InvalidPosition { .. }
                | BrainError::NoLegalMoves
                | BrainError::InvalidSetting { .. }
                | BrainError::MalformedGameRecord { .. }
        )
    }
}

/// Result type alias for learning agent operations
pub type BrainResult<T> = Result<T, BrainError>;
