//! HTTP layer for the chess coach
//!
//! Maps JSON requests onto the [`chess_brain::LearningAgent`] operations.

pub mod api;
pub mod config;
pub mod shutdown;
