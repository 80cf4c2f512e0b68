//! Engine strength profiles keyed by target rating
//!
//! Ratings map onto a fixed, ascending band table. Each band carries the
//! search depth, skill level and thinking time the opponent engine should use.

use crate::types::Rating;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One row of the band table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DifficultyBand {
    /// Ratings strictly below this value fall in the band
    upper_exclusive: Rating,
    /// Range the target rating is clamped into, if any
    target_range: Option<(Rating, Rating)>,
    depth: u32,
    skill_level: u32,
    thinking_time_ms: u64,
}

const fn band(
    upper_exclusive: Rating,
    target_range: Option<(Rating, Rating)>,
    depth: u32,
    skill_level: u32,
    thinking_time_ms: u64,
) -> DifficultyBand {
    DifficultyBand {
        upper_exclusive,
        target_range,
        depth,
        skill_level,
        thinking_time_ms,
    }
}

const BANDS: [DifficultyBand; 9] = [
    band(1000, Some((800, 999)), 1, 0, 500),
    band(1200, None, 2, 3, 800),
    band(1400, None, 3, 6, 1000),
    band(1600, None, 5, 9, 1500),
    band(1800, None, 8, 12, 2000),
    band(2000, None, 10, 15, 3000),
    band(2200, None, 12, 18, 4000),
    band(2400, None, 15, 20, 5000),
    band(2600, None, 18, 20, 7000),
];

/// Everything at or above the last threshold
const TOP_BAND: DifficultyBand = band(Rating::MAX, Some((2600, 3000)), 20, 20, 10000);

/// How strong and how fast the opponent engine should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub target_rating: Rating,
    pub depth: u32,
    pub skill_level: u32,
    pub thinking_time_ms: u64,
}

impl DifficultyProfile {
    /// Profile for an opponent playing at `target_rating`
    pub fn for_rating(target_rating: Rating) -> Self {
        let band = BANDS
            .iter()
            .find(|band| target_rating < band.upper_exclusive)
            .unwrap_or(&TOP_BAND);

        let target_rating = match band.target_range {
            Some((low, high)) => target_rating.clamp(low, high),
            None => target_rating,
        };

        Self {
            target_rating,
            depth: band.depth,
            skill_level: band.skill_level,
            thinking_time_ms: band.thinking_time_ms,
        }
    }

    /// UCI option commands that limit the engine to this profile.
    ///
    /// Strength limiting is enabled first; a conforming engine ignores
    /// `UCI_Elo` until it is.
    pub fn engine_directives(&self) -> Vec<String> {
        vec![
            "setoption name UCI_LimitStrength value true".to_string(),
            format!("setoption name UCI_Elo value {}", self.target_rating),
            format!("setoption name Skill Level value {}", self.skill_level),
        ]
    }

    /// UCI search command bounded by this profile's depth and time budget
    pub fn search_command(&self) -> String {
        format!(
            "go depth {} movetime {}",
            self.depth, self.thinking_time_ms
        )
    }

    pub fn thinking_time(&self) -> Duration {
        Duration::from_millis(self.thinking_time_ms)
    }
}

/// Profile for an opponent playing at `target_rating`
pub fn profile_for_rating(target_rating: Rating) -> DifficultyProfile {
    DifficultyProfile::for_rating(target_rating)
}
