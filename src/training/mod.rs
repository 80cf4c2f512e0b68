//! Adaptive training sessions
//!
//! Ties the rating update, statistics and opponent selection into the
//! game-by-game feedback loop against an engine opponent.

pub mod session;

// Re-export commonly used types
pub use session::{GameRecord, TrainingSession, DEFAULT_UNDO_DEPTH};
