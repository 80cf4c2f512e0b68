//! Rating system configuration

use crate::error::AdaptiveEloError;
use crate::types::{Rating, DEFAULT_STARTING_RATING, MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};

/// Parameters of the accuracy-aware Elo update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating for players with no recorded games
    pub starting_rating: Rating,
    /// Maximum rating swing for a single game
    pub k_factor: f64,
    /// Weight of the move-accuracy signal blended into the game score
    pub accuracy_weight: f64,
    /// Lower bound for any computed rating
    pub min_rating: Rating,
    /// Upper bound for any computed rating
    pub max_rating: Rating,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            starting_rating: DEFAULT_STARTING_RATING,
            k_factor: 32.0,
            accuracy_weight: 0.3,
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(AdaptiveEloError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.accuracy_weight) {
            return Err(AdaptiveEloError::ConfigurationError {
                message: "Accuracy weight must be between 0.0 and 1.0".to_string(),
            }
            .into());
        }

        if self.min_rating >= self.max_rating {
            return Err(AdaptiveEloError::ConfigurationError {
                message: format!(
                    "Rating bounds are empty: {}..{}",
                    self.min_rating, self.max_rating
                ),
            }
            .into());
        }

        if !(self.min_rating..=self.max_rating).contains(&self.starting_rating) {
            return Err(AdaptiveEloError::ConfigurationError {
                message: format!(
                    "Starting rating {} is outside {}..={}",
                    self.starting_rating, self.min_rating, self.max_rating
                ),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RatingConfig::default();
        assert_eq!(config.starting_rating, 1200);
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.accuracy_weight, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RatingConfig::default();
        config.k_factor = 0.0;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.k_factor = f64::NAN;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.accuracy_weight = 1.5;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.min_rating = 3000;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.starting_rating = 100;
        assert!(config.validate().is_err());
    }
}
