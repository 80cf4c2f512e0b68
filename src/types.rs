//! Common types used throughout the rating service

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Unique identifier for players
pub type PlayerId = String;

/// Integer skill estimate for a player or a configured opponent
pub type Rating = i32;

/// Lowest rating a player can reach
pub const MIN_RATING: Rating = 400;

/// Highest rating a player can reach
pub const MAX_RATING: Rating = 3000;

/// Rating assigned to a player before any game is recorded
pub const DEFAULT_STARTING_RATING: Rating = 1200;

/// Side of the board held by the tracked player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    /// The other side of the board
    pub fn opposite(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::White => write!(f, "white"),
            PlayerColor::Black => write!(f, "black"),
        }
    }
}

impl FromStr for PlayerColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(PlayerColor::White),
            "black" | "b" => Ok(PlayerColor::Black),
            other => Err(format!("unknown player color: {}", other)),
        }
    }
}

/// Outcome of a single game from the tracked player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Resolve a PGN result tag (`1-0`, `0-1`, `1/2-1/2`) for the given side.
    ///
    /// Unfinished or unrecognized notations (including `*`) count as a draw.
    pub fn from_pgn_result(result: &str, player_color: PlayerColor) -> Self {
        match result {
            "1-0" => match player_color {
                PlayerColor::White => GameResult::Win,
                PlayerColor::Black => GameResult::Loss,
            },
            "0-1" => match player_color {
                PlayerColor::Black => GameResult::Win,
                PlayerColor::White => GameResult::Loss,
            },
            "1/2-1/2" => GameResult::Draw,
            other => {
                if other != "*" {
                    warn!("Unrecognized result notation {:?}, scoring as draw", other);
                }
                GameResult::Draw
            }
        }
    }

    /// Literal game score: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win => write!(f, "win"),
            GameResult::Draw => write!(f, "draw"),
            GameResult::Loss => write!(f, "loss"),
        }
    }
}

/// A finished game as reported by the match layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedGame {
    /// PGN result tag of the game
    pub result_notation: String,
    /// Side the tracked player held
    pub player_color: PlayerColor,
    /// Share of the player's moves judged accurate, 0.0 to 100.0
    pub move_accuracy: f64,
    /// Rating the opponent engine was configured with
    pub opponent_rating: Rating,
}

impl CompletedGame {
    /// Game result from the tracked player's perspective
    pub fn result(&self) -> GameResult {
        GameResult::from_pgn_result(&self.result_notation, self.player_color)
    }
}
