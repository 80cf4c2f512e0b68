//! Accuracy-aware Elo rating system
//!
//! This module provides the rating update, the cumulative statistics that
//! follow a player from game to game, and the storage seam for persisting them.

pub mod calculator;
pub mod elo;
pub mod history;
pub mod storage;

// Re-export commonly used types
pub use calculator::{NoOpRatingCalculator, RatingCalculator, RatingUpdate};
pub use elo::{
    accuracy_bonus, calculate_expected_score, calculate_new_rating, confidence_interval,
    win_probability, EloCalculator,
};
pub use history::RatingStats;
pub use storage::{InMemoryRatingStorage, RatingEntry, RatingStorage};
