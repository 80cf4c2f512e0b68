//! Adaptive Elo - rating tracking and opponent difficulty for chess training
//!
//! This crate rates a player after every game against an engine opponent,
//! blending move accuracy into the classic Elo update, and picks the engine
//! strength profile for the following game.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod rating;
pub mod training;
pub mod types;

// Re-export commonly used types and traits
pub use error::{AdaptiveEloError, Result};
pub use types::*;

// Re-export key components
pub use difficulty::{DifficultyProfile, DifficultySelector, OpponentEngine};
pub use rating::{EloCalculator, RatingCalculator, RatingStats, RatingStorage};
pub use training::TrainingSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
