//! Rating storage interface and implementations
//!
//! Persistence of rating statistics belongs to the embedding application.
//! This module defines the load/save seam it plugs into, plus an in-memory
//! implementation used by the CLI and tests.

use crate::error::AdaptiveEloError;
use crate::rating::history::RatingStats;
use crate::types::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Stored rating statistics with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub player_id: PlayerId,
    pub stats: RatingStats,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RatingEntry {
    /// Create a new entry for a player
    pub fn new(player_id: PlayerId, stats: RatingStats) -> Self {
        let now = Utc::now();
        Self {
            player_id,
            stats,
            last_updated: now,
            created_at: now,
        }
    }

    /// Replace the stored snapshot
    pub fn update_stats(&mut self, stats: RatingStats) {
        self.stats = stats;
        self.last_updated = Utc::now();
    }
}

/// Trait for rating storage operations
pub trait RatingStorage: Send + Sync {
    /// Load a player's latest statistics
    fn load(&self, player_id: &PlayerId) -> crate::error::Result<Option<RatingStats>>;

    /// Store a player's latest statistics
    fn save(&self, player_id: &PlayerId, stats: &RatingStats) -> crate::error::Result<()>;

    /// Remove a player's statistics
    fn remove(&self, player_id: &PlayerId) -> crate::error::Result<bool>;

    /// Get total number of rated players
    fn player_count(&self) -> crate::error::Result<usize>;
}

/// In-memory rating storage implementation
///
/// Entries are kept until explicitly removed.
#[derive(Debug, Default)]
pub struct InMemoryRatingStorage {
    entries: RwLock<HashMap<PlayerId, RatingEntry>>,
}

impl InMemoryRatingStorage {
    /// Create a new in-memory rating storage
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> crate::error::Result<RwLockReadGuard<'_, HashMap<PlayerId, RatingEntry>>> {
        self.entries.read().map_err(|_| {
            AdaptiveEloError::StorageError {
                message: "Failed to acquire ratings read lock".to_string(),
            }
            .into()
        })
    }

    fn write(
        &self,
    ) -> crate::error::Result<RwLockWriteGuard<'_, HashMap<PlayerId, RatingEntry>>> {
        self.entries.write().map_err(|_| {
            AdaptiveEloError::StorageError {
                message: "Failed to acquire ratings write lock".to_string(),
            }
            .into()
        })
    }
}

impl RatingStorage for InMemoryRatingStorage {
    fn load(&self, player_id: &PlayerId) -> crate::error::Result<Option<RatingStats>> {
        Ok(self.read()?.get(player_id).map(|entry| entry.stats))
    }

    fn save(&self, player_id: &PlayerId, stats: &RatingStats) -> crate::error::Result<()> {
        let mut entries = self.write()?;

        entries
            .entry(player_id.clone())
            .and_modify(|entry| entry.update_stats(*stats))
            .or_insert_with(|| RatingEntry::new(player_id.clone(), *stats));

        debug!(%player_id, players = entries.len(), "Stored rating statistics");
        Ok(())
    }

    fn remove(&self, player_id: &PlayerId) -> crate::error::Result<bool> {
        Ok(self.write()?.remove(player_id).is_some())
    }

    fn player_count(&self) -> crate::error::Result<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameResult, Rating};

    fn stats_at(rating: Rating) -> RatingStats {
        RatingStats::initial(rating)
    }

    #[test]
    fn test_rating_entry_update() {
        let mut entry = RatingEntry::new("player1".to_string(), stats_at(1200));
        let created = entry.created_at;

        let next = entry.stats.with_game_result(1216, GameResult::Win);
        entry.update_stats(next);

        assert_eq!(entry.stats.current_rating, 1216);
        assert_eq!(entry.stats.games_played, 1);
        assert_eq!(entry.created_at, created);
        assert!(entry.last_updated >= created);
    }

    #[test]
    fn test_in_memory_storage_basic_operations() {
        let storage = InMemoryRatingStorage::new();
        let player = "player1".to_string();

        assert!(storage.load(&player).unwrap().is_none());

        storage.save(&player, &stats_at(1500)).unwrap();
        assert_eq!(storage.load(&player).unwrap(), Some(stats_at(1500)));

        let updated = stats_at(1500).with_game_result(1490, GameResult::Loss);
        storage.save(&player, &updated).unwrap();
        assert_eq!(storage.load(&player).unwrap(), Some(updated));
        assert_eq!(storage.player_count().unwrap(), 1);
    }

    #[test]
    fn test_player_removal() {
        let storage = InMemoryRatingStorage::new();
        let player = "player1".to_string();

        storage.save(&player, &stats_at(1500)).unwrap();
        assert!(storage.remove(&player).unwrap());
        assert!(storage.load(&player).unwrap().is_none());
        assert!(!storage.remove(&"nonexistent".to_string()).unwrap());
    }

    #[test]
    fn test_many_players_are_all_retained() {
        let storage = InMemoryRatingStorage::new();
        let first = "p0".to_string();

        let mut veteran = stats_at(1200);
        for i in 1..=10 {
            veteran = veteran.with_game_result(1200 + 15 * i, GameResult::Win);
        }
        storage.save(&first, &veteran).unwrap();

        for i in 1..=20_000 {
            storage.save(&format!("p{}", i), &stats_at(1200)).unwrap();
        }

        assert_eq!(storage.player_count().unwrap(), 20_001);
        assert_eq!(storage.load(&first).unwrap(), Some(veteran));
    }
}
