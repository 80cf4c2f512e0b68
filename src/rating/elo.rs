//! Accuracy-aware Elo rating implementation
//!
//! The update follows the classic Elo curve, but the literal game score is
//! blended with the player's move accuracy before it is compared against the
//! expected score. A well-played loss costs less and a sloppy win earns less.

use crate::config::RatingConfig;
use crate::rating::calculator::RatingCalculator;
use crate::types::{GameResult, Rating};
use skillratings::elo::{expected_score, EloRating};
use tracing::debug;

/// Expected score of `player_rating` against `opponent_rating`, in (0, 1)
pub fn calculate_expected_score(player_rating: Rating, opponent_rating: Rating) -> f64 {
    let player = EloRating {
        rating: f64::from(player_rating),
    };
    let opponent = EloRating {
        rating: f64::from(opponent_rating),
    };

    expected_score(&player, &opponent).0
}

/// Win probability as a percentage
pub fn win_probability(player_rating: Rating, opponent_rating: Rating) -> f64 {
    calculate_expected_score(player_rating, opponent_rating) * 100.0
}

/// +/- uncertainty around a rating after `games_played` games
pub fn confidence_interval(games_played: u32) -> Rating {
    match games_played {
        0..=4 => 150,
        5..=9 => 100,
        10..=19 => 50,
        20..=49 => 25,
        _ => 0,
    }
}

/// Score adjustment from move accuracy, in [-0.5, 0.5] and zero at 50%
pub fn accuracy_bonus(move_accuracy: f64) -> f64 {
    let bonus = ((move_accuracy - 50.0) / 100.0).clamp(-0.5, 0.5);
    if bonus.is_nan() {
        0.0
    } else {
        bonus
    }
}

/// New rating under the default configuration
pub fn calculate_new_rating(
    current_rating: Rating,
    opponent_rating: Rating,
    result: GameResult,
    move_accuracy: f64,
) -> Rating {
    EloCalculator::default().calculate_new_rating(
        current_rating,
        opponent_rating,
        result,
        move_accuracy,
    )
}

/// Elo rating calculator with move-accuracy blending
#[derive(Debug, Clone, Default)]
pub struct EloCalculator {
    config: RatingConfig,
}

impl EloCalculator {
    /// Create a new Elo calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Active configuration
    pub fn rating_config(&self) -> &RatingConfig {
        &self.config
    }

    /// Game score after blending in the accuracy signal, in [0, 1]
    pub fn adjusted_score(&self, result: GameResult, move_accuracy: f64) -> f64 {
        (result.score() + accuracy_bonus(move_accuracy) * self.config.accuracy_weight)
            .clamp(0.0, 1.0)
    }
}

impl RatingCalculator for EloCalculator {
    fn calculate_new_rating(
        &self,
        current_rating: Rating,
        opponent_rating: Rating,
        result: GameResult,
        move_accuracy: f64,
    ) -> Rating {
        let expected = calculate_expected_score(current_rating, opponent_rating);
        let adjusted = self.adjusted_score(result, move_accuracy);

        // Truncate toward zero: -7.8 becomes -7.
        let change = (self.config.k_factor * (adjusted - expected)).trunc() as Rating;
        let new_rating = current_rating
            .saturating_add(change)
            .clamp(self.config.min_rating, self.config.max_rating);

        debug!(
            current_rating,
            opponent_rating,
            %result,
            move_accuracy,
            expected,
            adjusted,
            change,
            new_rating,
            "Calculated rating update"
        );

        new_rating
    }

    fn initial_rating(&self) -> Rating {
        self.config.starting_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score_equal_ratings() {
        assert_eq!(calculate_expected_score(1200, 1200), 0.5);
        assert_eq!(calculate_expected_score(2500, 2500), 0.5);
    }

    #[test]
    fn test_expected_score_rating_gap() {
        let stronger = calculate_expected_score(1700, 1500);
        assert!(stronger > 0.7 && stronger < 0.8);

        let weaker = calculate_expected_score(1500, 1700);
        assert!(weaker > 0.2 && weaker < 0.3);
        assert!((stronger + weaker - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_win_probability() {
        assert_eq!(win_probability(1200, 1200), 50.0);
        assert!(win_probability(1600, 1200) > 90.0);
    }

    #[test]
    fn test_confidence_interval_bands() {
        let expected = [
            150, 150, 150, 150, 150, 100, 100, 100, 100, 100, 50, 50, 50, 50, 50, 50, 50, 50, 50,
            50, 25,
        ];
        for (games, interval) in expected.iter().enumerate() {
            assert_eq!(confidence_interval(games as u32), *interval, "games={}", games);
        }
        assert_eq!(confidence_interval(49), 25);
        assert_eq!(confidence_interval(50), 0);
        assert_eq!(confidence_interval(u32::MAX), 0);
    }

    #[test]
    fn test_accuracy_bonus_clamped() {
        assert_eq!(accuracy_bonus(50.0), 0.0);
        assert_eq!(accuracy_bonus(100.0), 0.5);
        assert_eq!(accuracy_bonus(0.0), -0.5);
        assert_eq!(accuracy_bonus(250.0), 0.5);
        assert_eq!(accuracy_bonus(-40.0), -0.5);
        assert_eq!(accuracy_bonus(f64::NAN), 0.0);
    }

    #[test]
    fn test_perfect_win_between_equals() {
        assert_eq!(
            calculate_new_rating(1200, 1200, GameResult::Win, 100.0),
            1216
        );
    }

    #[test]
    fn test_careless_loss_between_equals() {
        assert_eq!(calculate_new_rating(1200, 1200, GameResult::Loss, 0.0), 1184);
    }

    #[test]
    fn test_neutral_draw_between_equals() {
        assert_eq!(
            calculate_new_rating(1200, 1200, GameResult::Draw, 50.0),
            1200
        );
    }

    #[test]
    fn test_accurate_loss_softens_penalty() {
        let sloppy = calculate_new_rating(1200, 1200, GameResult::Loss, 20.0);
        let accurate = calculate_new_rating(1200, 1200, GameResult::Loss, 95.0);
        assert!(accurate > sloppy);
        assert!(accurate < 1200);
    }

    #[test]
    fn test_change_truncates_toward_zero() {
        // 32 * (0.0 - 0.5) with 40% accuracy: adjusted = max(-0.03, 0) = 0, change = -16
        assert_eq!(calculate_new_rating(1200, 1200, GameResult::Loss, 40.0), 1184);

        // Draw at 1200 vs 1300: expected ~0.3599, adjusted 0.5, change 4.48 -> 4
        assert_eq!(
            calculate_new_rating(1200, 1300, GameResult::Draw, 50.0),
            1204
        );

        // Draw at 1300 vs 1200: change -4.48 -> -4, not -5
        assert_eq!(
            calculate_new_rating(1300, 1200, GameResult::Draw, 50.0),
            1296
        );
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(calculate_new_rating(400, 3000, GameResult::Loss, 0.0), 400);
        assert_eq!(calculate_new_rating(3000, 400, GameResult::Win, 100.0), 3000);
        assert_eq!(calculate_new_rating(2995, 2995, GameResult::Win, 100.0), 3000);
        assert_eq!(
            calculate_new_rating(i32::MAX, i32::MIN, GameResult::Win, 100.0),
            3000
        );
    }

    #[test]
    fn test_custom_config() {
        let config = RatingConfig {
            k_factor: 16.0,
            accuracy_weight: 0.0,
            ..RatingConfig::default()
        };
        let calculator = EloCalculator::new(config).unwrap();

        assert_eq!(
            calculator.calculate_new_rating(1200, 1200, GameResult::Win, 0.0),
            1208
        );
        assert_eq!(calculator.initial_rating(), 1200);
        assert_eq!(calculator.config()["k_factor"], 16.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RatingConfig {
            k_factor: -1.0,
            ..RatingConfig::default()
        };
        assert!(EloCalculator::new(config).is_err());
    }

    #[test]
    fn test_rate_game_breakdown() {
        let calculator = EloCalculator::default();
        let update = calculator.rate_game(1200, 1200, GameResult::Win, 100.0);
        assert_eq!(update.old_rating, 1200);
        assert_eq!(update.new_rating, 1216);
        assert_eq!(update.change, 16);
        assert_eq!(update.expected_score, 0.5);
    }
}
