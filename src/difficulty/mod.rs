//! Opponent difficulty adaptation
//!
//! This module maps target ratings onto engine strength profiles and renders
//! them into the UCI directives an external engine understands.

pub mod engine;
pub mod profile;
pub mod selector;

// Re-export commonly used types
pub use engine::{configure_engine, OpponentEngine, RecordingEngine};
pub use profile::{profile_for_rating, DifficultyProfile};
pub use selector::{recommended_opponent_rating, DifficultySelector};
