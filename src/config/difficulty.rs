//! Opponent difficulty configuration

use crate::error::AdaptiveEloError;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// How the opponent rating is chosen from the player's rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Points added to the player's rating to pick the opponent
    pub opponent_offset: Rating,
    pub min_opponent_rating: Rating,
    pub max_opponent_rating: Rating,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            opponent_offset: 50,
            min_opponent_rating: 800,
            max_opponent_rating: 2800,
        }
    }
}

impl DifficultyConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.min_opponent_rating > self.max_opponent_rating {
            return Err(AdaptiveEloError::ConfigurationError {
                message: format!(
                    "Opponent rating bounds are empty: {}..{}",
                    self.min_opponent_rating, self.max_opponent_rating
                ),
            }
            .into());
        }

        Ok(())
    }
}
