//! Cumulative rating statistics
//!
//! `RatingStats` is an immutable snapshot. Each recorded game produces the
//! next snapshot, so callers can keep earlier ones around for replay or undo.

use crate::rating::elo::confidence_interval;
use crate::types::{GameResult, Rating, DEFAULT_STARTING_RATING};
use serde::{Deserialize, Serialize};

/// Running statistics for one player's rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingStats {
    pub current_rating: Rating,
    pub peak_rating: Rating,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// +/- uncertainty around `current_rating`
    pub confidence_interval: Rating,
}

impl RatingStats {
    /// Statistics for a player who has not played yet
    pub fn initial(starting_rating: Rating) -> Self {
        Self {
            current_rating: starting_rating,
            peak_rating: starting_rating,
            games_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            confidence_interval: confidence_interval(0),
        }
    }

    /// Snapshot after one more game ending at `new_rating`
    pub fn with_game_result(&self, new_rating: Rating, result: GameResult) -> Self {
        let games_played = self.games_played.saturating_add(1);
        let (wins, losses, draws) = match result {
            GameResult::Win => (self.wins.saturating_add(1), self.losses, self.draws),
            GameResult::Loss => (self.wins, self.losses.saturating_add(1), self.draws),
            GameResult::Draw => (self.wins, self.losses, self.draws.saturating_add(1)),
        };

        Self {
            current_rating: new_rating,
            peak_rating: self.peak_rating.max(new_rating),
            games_played,
            wins,
            losses,
            draws,
            confidence_interval: confidence_interval(games_played),
        }
    }

    /// Percentage of games won
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Percentage of games drawn
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Percentage of games lost
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Plausible rating range given the current confidence interval
    pub fn rating_range(&self) -> (Rating, Rating) {
        (
            self.current_rating.saturating_sub(self.confidence_interval),
            self.current_rating.saturating_add(self.confidence_interval),
        )
    }

    /// True while the rating is still provisional
    pub fn is_provisional(&self) -> bool {
        self.confidence_interval > 0
    }

    fn rate(&self, count: u32) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(self.games_played) * 100.0
    }
}

impl Default for RatingStats {
    fn default() -> Self {
        Self::initial(DEFAULT_STARTING_RATING)
    }
}
