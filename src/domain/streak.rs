/// Streak transition rules
///
/// This module encapsulates the only two legal streak mutations: recording a
/// completion (streak goes up by one) and recording a miss (streak drops to
/// zero). State per habit is just the current counter, so the engine is a
/// minimal two-transition state machine driven through the storage trait.

use crate::domain::HabitId;
use crate::storage::{HabitStore, StorageError};

/// Engine applying streak transitions against a habit store
///
/// The engine is stateless; it reads the current counter through the store
/// and writes the new value back. Periodicity never drives any automatic
/// reset here: a streak only ever drops when a miss is recorded explicitly,
/// so streak correctness relative to calendar time is the caller's
/// responsibility.
pub struct StreakEngine;

impl StreakEngine {
    /// Create a new streak engine
    pub fn new() -> Self {
        Self
    }

    /// Record a completion: the habit's streak goes from `n` to `n + 1`
    ///
    /// There is no upper bound. Fails with `HabitNotFound` when the id does
    /// not exist.
    pub fn record_completion<S: HabitStore>(
        &self,
        store: &S,
        id: HabitId,
    ) -> Result<(), StorageError> {
        let habit = store.get_habit(id)?;
        store.set_streak(id, habit.streak + 1)?;
        tracing::debug!("Recorded completion for habit {}: streak {} -> {}", id, habit.streak, habit.streak + 1);
        Ok(())
    }

    /// Record a miss: the habit's streak drops to zero unconditionally
    ///
    /// Resetting an already-zero streak is valid and leaves it at zero.
    /// Fails with `HabitNotFound` when the id does not exist.
    pub fn record_miss<S: HabitStore>(
        &self,
        store: &S,
        id: HabitId,
    ) -> Result<(), StorageError> {
        store.set_streak(id, 0)?;
        tracing::debug!("Recorded miss for habit {}: streak reset to 0", id);
        Ok(())
    }
}

impl Default for StreakEngine {
    fn default() -> Self {
        Self::new()
    }
}
