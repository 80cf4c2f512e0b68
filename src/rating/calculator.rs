//! Rating calculator trait and implementations
//!
//! This module defines the interface for rating updates and provides a
//! fallback implementation that never moves a rating.

use crate::rating::elo::calculate_expected_score;
use crate::types::{GameResult, Rating, DEFAULT_STARTING_RATING};
use serde::{Deserialize, Serialize};

/// Breakdown of a single rating update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub old_rating: Rating,
    pub new_rating: Rating,
    /// Applied change after clamping to the rating bounds
    pub change: Rating,
    /// Expected score against the opponent before the game (0.0 to 1.0)
    pub expected_score: f64,
}

/// Trait for calculating a player's new rating after a game
pub trait RatingCalculator: Send + Sync {
    /// Calculate the player's rating after one game
    ///
    /// # Arguments
    /// * `current_rating` - Player's rating before the game
    /// * `opponent_rating` - Rating the opponent was configured with
    /// * `result` - Game result from the player's perspective
    /// * `move_accuracy` - Player's move accuracy percentage (0.0 to 100.0)
    fn calculate_new_rating(
        &self,
        current_rating: Rating,
        opponent_rating: Rating,
        result: GameResult,
        move_accuracy: f64,
    ) -> Rating;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Rate a game and report the full breakdown
    fn rate_game(
        &self,
        current_rating: Rating,
        opponent_rating: Rating,
        result: GameResult,
        move_accuracy: f64,
    ) -> RatingUpdate {
        let new_rating =
            self.calculate_new_rating(current_rating, opponent_rating, result, move_accuracy);

        RatingUpdate {
            old_rating: current_rating,
            new_rating,
            change: new_rating.saturating_sub(current_rating),
            expected_score: calculate_expected_score(current_rating, opponent_rating),
        }
    }
}

/// Rating calculator that keeps every rating unchanged
#[derive(Debug, Clone)]
pub struct NoOpRatingCalculator {
    initial_rating: Rating,
}

impl NoOpRatingCalculator {
    /// Create a new no-op rating calculator
    pub fn new(initial_rating: Rating) -> Self {
        Self { initial_rating }
    }
}

impl Default for NoOpRatingCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_RATING)
    }
}

impl RatingCalculator for NoOpRatingCalculator {
    fn calculate_new_rating(
        &self,
        current_rating: Rating,
        _opponent_rating: Rating,
        _result: GameResult,
        _move_accuracy: f64,
    ) -> Rating {
        current_rating
    }

    fn initial_rating(&self) -> Rating {
        self.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "no_op",
            "initial_rating": self.initial_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_calculator() {
        let calculator = NoOpRatingCalculator::default();
        assert_eq!(calculator.initial_rating(), 1200);

        let update = calculator.rate_game(1500, 1200, GameResult::Win, 100.0);
        assert_eq!(update.old_rating, 1500);
        assert_eq!(update.new_rating, 1500);
        assert_eq!(update.change, 0);
        assert!(update.expected_score > 0.5);
    }

    #[test]
    fn test_no_op_config() {
        let calculator = NoOpRatingCalculator::new(900);
        let config = calculator.config();
        assert_eq!(config["type"], "no_op");
        assert_eq!(config["initial_rating"], 900);
    }
}
