//! Error types for the rating service
//!
//! The rating and difficulty calculations are total and never fail. Errors
//! only come from the outer layers: configuration, storage and engine setup.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum AdaptiveEloError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Rating storage error: {message}")]
    StorageError { message: String },

    #[error("Engine configuration failed: {message}")]
    EngineError { message: String },

    #[error("No recorded game to undo for player {player_id}")]
    NothingToUndo { player_id: String },
}
