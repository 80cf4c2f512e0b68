//! Training session implementation
//!
//! A `TrainingSession` follows one player through a sequence of games. Each
//! recorded game rates the player, folds the result into a fresh statistics
//! snapshot and determines the opponent profile for the next game. Games are
//! recorded through `&mut self`, so one update always completes before the
//! next opponent is chosen.

use crate::difficulty::{DifficultyProfile, DifficultySelector};
use crate::error::{AdaptiveEloError, Result};
use crate::rating::{RatingCalculator, RatingStats, RatingStorage, RatingUpdate};
use crate::types::{CompletedGame, GameResult, PlayerId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Snapshots kept for undo unless a session is configured otherwise
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// Outcome of recording one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub move_accuracy: f64,
    pub update: RatingUpdate,
    /// Statistics after the game
    pub stats: RatingStats,
    /// Opponent profile for the following game
    pub next_profile: DifficultyProfile,
}

/// One player's adaptive sequence of games
#[derive(Clone)]
pub struct TrainingSession {
    player_id: PlayerId,
    /// Rating calculator for game updates
    calculator: Arc<dyn RatingCalculator>,
    /// Opponent selection for the next game
    selector: DifficultySelector,
    current: RatingStats,
    /// Earlier snapshots, oldest first, at most `undo_depth` of them
    previous: Vec<RatingStats>,
    undo_depth: usize,
}

impl TrainingSession {
    /// Start a session for a player with no recorded games
    pub fn new(
        player_id: PlayerId,
        calculator: Arc<dyn RatingCalculator>,
        selector: DifficultySelector,
    ) -> Self {
        let stats = RatingStats::initial(calculator.initial_rating());
        Self::with_stats(player_id, calculator, selector, stats)
    }

    /// Resume a session from existing statistics
    pub fn with_stats(
        player_id: PlayerId,
        calculator: Arc<dyn RatingCalculator>,
        selector: DifficultySelector,
        stats: RatingStats,
    ) -> Self {
        Self {
            player_id,
            calculator,
            selector,
            current: stats,
            previous: Vec::new(),
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }

    /// Limit how many recorded games can be undone
    ///
    /// Older snapshots are discarded once the limit is reached. A depth of
    /// zero disables undo.
    pub fn with_undo_depth(mut self, undo_depth: usize) -> Self {
        self.undo_depth = undo_depth;
        self.trim_history();
        self
    }

    /// Resume from storage, or start fresh if the player is unknown
    pub fn load(
        storage: &dyn RatingStorage,
        player_id: PlayerId,
        calculator: Arc<dyn RatingCalculator>,
        selector: DifficultySelector,
    ) -> Result<Self> {
        match storage.load(&player_id)? {
            Some(stats) => {
                info!(
                    %player_id,
                    rating = stats.current_rating,
                    games_played = stats.games_played,
                    "Resumed training session"
                );
                Ok(Self::with_stats(player_id, calculator, selector, stats))
            }
            None => {
                info!(%player_id, "Starting new training session");
                Ok(Self::new(player_id, calculator, selector))
            }
        }
    }

    /// Persist the current statistics
    pub fn save(&self, storage: &dyn RatingStorage) -> Result<()> {
        storage.save(&self.player_id, &self.current)?;
        debug!(player_id = %self.player_id, "Saved rating statistics");
        Ok(())
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Current statistics snapshot
    pub fn stats(&self) -> &RatingStats {
        &self.current
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_depth
    }

    /// Snapshots preceding the current one that can still be undone, oldest first
    pub fn history(&self) -> &[RatingStats] {
        &self.previous
    }

    /// Opponent profile for the next game
    pub fn next_opponent(&self) -> DifficultyProfile {
        self.selector.next_profile(self.current.current_rating)
    }

    /// Rate a finished game and advance the statistics
    pub fn record_game(&mut self, game: &CompletedGame) -> GameRecord {
        let result = game.result();
        let update = self.calculator.rate_game(
            self.current.current_rating,
            game.opponent_rating,
            result,
            game.move_accuracy,
        );

        let next = self.current.with_game_result(update.new_rating, result);
        self.previous.push(self.current);
        self.trim_history();
        self.current = next;

        let next_profile = self.next_opponent();

        info!(
            player_id = %self.player_id,
            %result,
            old_rating = update.old_rating,
            new_rating = update.new_rating,
            change = update.change,
            games_played = next.games_played,
            "Recorded game"
        );

        GameRecord {
            result,
            move_accuracy: game.move_accuracy,
            update,
            stats: next,
            next_profile,
        }
    }

    /// Drop the most recent game and restore the snapshot before it
    pub fn undo_last(&mut self) -> Result<RatingStats> {
        let restored = self
            .previous
            .pop()
            .ok_or_else(|| AdaptiveEloError::NothingToUndo {
                player_id: self.player_id.clone(),
            })?;

        info!(
            player_id = %self.player_id,
            rating = restored.current_rating,
            "Undid last recorded game"
        );

        self.current = restored;
        Ok(restored)
    }

    fn trim_history(&mut self) {
        if self.previous.len() > self.undo_depth {
            let excess = self.previous.len() - self.undo_depth;
            self.previous.drain(..excess);
        }
    }
}

impl std::fmt::Debug for TrainingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingSession")
            .field("player_id", &self.player_id)
            .field("calculator", &self.calculator.config())
            .field("selector", &self.selector)
            .field("current", &self.current)
            .field("previous", &self.previous.len())
            .field("undo_depth", &self.undo_depth)
            .finish()
    }
}
