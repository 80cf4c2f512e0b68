//! Test fixtures for driving training sessions with simulated games

use adaptive_elo::difficulty::DifficultyProfile;
use adaptive_elo::types::{CompletedGame, PlayerColor, Rating};

/// A player whose results depend only on a hidden true strength
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    pub true_strength: Rating,
    pub move_accuracy: f64,
    /// Rating gap inside which games are drawn
    pub draw_margin: Rating,
}

impl SimulatedPlayer {
    pub fn new(true_strength: Rating, move_accuracy: f64) -> Self {
        Self {
            true_strength,
            move_accuracy,
            draw_margin: 100,
        }
    }

    /// Play one game against an engine configured with `profile`
    pub fn play(&self, profile: &DifficultyProfile, color: PlayerColor) -> CompletedGame {
        let gap = self.true_strength - profile.target_rating;
        let player_won = gap > self.draw_margin;
        let player_lost = gap < -self.draw_margin;

        let result_notation = match (player_won, player_lost, color) {
            (true, _, PlayerColor::White) | (_, true, PlayerColor::Black) => "1-0",
            (true, _, PlayerColor::Black) | (_, true, PlayerColor::White) => "0-1",
            _ => "1/2-1/2",
        };

        CompletedGame {
            result_notation: result_notation.to_string(),
            player_color: color,
            move_accuracy: self.move_accuracy,
            opponent_rating: profile.target_rating,
        }
    }
}

/// Colors alternating from white, one per game
pub fn alternating_colors(games: usize) -> impl Iterator<Item = PlayerColor> {
    (0..games).map(|i| {
        if i % 2 == 0 {
            PlayerColor::White
        } else {
            PlayerColor::Black
        }
    })
}
