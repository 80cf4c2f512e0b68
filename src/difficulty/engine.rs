//! Opponent engine configuration interface
//!
//! The move-search engine itself lives outside this crate. It is reached
//! only through its configuration channel, which accepts the ordered UCI
//! directives produced by a [`DifficultyProfile`].

use crate::difficulty::profile::DifficultyProfile;
use crate::error::AdaptiveEloError;
use tracing::{debug, error};

/// Configuration channel of an external chess engine
pub trait OpponentEngine {
    /// Apply UCI directives in the given order
    fn apply_directives(&mut self, directives: &[String]) -> crate::error::Result<()>;
}

/// Hand a profile's directives to the engine
pub fn configure_engine<E: OpponentEngine + ?Sized>(
    engine: &mut E,
    profile: &DifficultyProfile,
) -> crate::error::Result<()> {
    let directives = profile.engine_directives();
    debug!(target_rating = profile.target_rating, ?directives, "Configuring opponent engine");

    engine.apply_directives(&directives).map_err(|e| {
        error!("Engine rejected directives: {}", e);
        AdaptiveEloError::EngineError {
            message: format!(
                "failed to apply profile for rating {}: {}",
                profile.target_rating, e
            ),
        }
        .into()
    })
}

/// Engine stand-in that collects every directive it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    directives: Vec<String>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All directives applied so far, oldest first
    pub fn directives(&self) -> &[String] {
        &self.directives
    }
}

impl OpponentEngine for RecordingEngine {
    fn apply_directives(&mut self, directives: &[String]) -> crate::error::Result<()> {
        self.directives.extend_from_slice(directives);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::profile::profile_for_rating;

    struct RejectingEngine;

    impl OpponentEngine for RejectingEngine {
        fn apply_directives(&mut self, _directives: &[String]) -> crate::error::Result<()> {
            Err(anyhow::anyhow!("engine is not running"))
        }
    }

    #[test]
    fn test_configure_recording_engine() {
        let mut engine = RecordingEngine::new();
        configure_engine(&mut engine, &profile_for_rating(1500)).unwrap();

        assert_eq!(engine.directives().len(), 3);
        assert_eq!(
            engine.directives()[0],
            "setoption name UCI_LimitStrength value true"
        );
        assert_eq!(engine.directives()[1], "setoption name UCI_Elo value 1500");
    }

    #[test]
    fn test_engine_failure_is_reported() {
        let mut engine = RejectingEngine;
        let err = configure_engine(&mut engine, &profile_for_rating(1500)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AdaptiveEloError>(),
            Some(AdaptiveEloError::EngineError { .. })
        ));
    }
}
