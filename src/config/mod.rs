//! Configuration management for the adaptive-elo service
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values for rating and difficulty.

pub mod app;
pub mod difficulty;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use difficulty::DifficultyConfig;
pub use rating::RatingConfig;
