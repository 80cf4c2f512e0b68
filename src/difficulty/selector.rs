//! Opponent selection from the player's current rating

use crate::config::DifficultyConfig;
use crate::difficulty::profile::DifficultyProfile;
use crate::types::Rating;
use tracing::debug;

/// Opponent rating for a player, slightly above their own level
pub fn recommended_opponent_rating(player_rating: Rating) -> Rating {
    DifficultySelector::default().recommended_opponent_rating(player_rating)
}

/// Picks the next opponent's rating and engine profile
#[derive(Debug, Clone, Default)]
pub struct DifficultySelector {
    config: DifficultyConfig,
}

impl DifficultySelector {
    /// Create a new selector
    pub fn new(config: DifficultyConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn difficulty_config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Opponent rating for a player at `player_rating`
    pub fn recommended_opponent_rating(&self, player_rating: Rating) -> Rating {
        player_rating
            .saturating_add(self.config.opponent_offset)
            .clamp(
                self.config.min_opponent_rating,
                self.config.max_opponent_rating,
            )
    }

    /// Engine profile for the next game of a player at `player_rating`
    pub fn next_profile(&self, player_rating: Rating) -> DifficultyProfile {
        let opponent_rating = self.recommended_opponent_rating(player_rating);
        let profile = DifficultyProfile::for_rating(opponent_rating);

        debug!(
            player_rating,
            opponent_rating,
            depth = profile.depth,
            skill_level = profile.skill_level,
            thinking_time_ms = profile.thinking_time_ms,
            "Selected opponent profile"
        );

        profile
    }
}
