/// Public library interface for the habit tracker
///
/// This crate is the habit persistence and streak-accounting engine: the
/// durable record of habits, the two legal streak transitions, and the
/// aggregation logic that turns stored records into summary statistics.
/// Presentation (the CLI binary, or any other front end) calls in through
/// the `HabitTracker` facade and always passes explicit habit ids.

use std::path::Path;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod storage;

// Re-export public modules and types
pub use analytics::{AnalyticsEngine, StreakEntry};
pub use domain::*;
pub use storage::{HabitStore, SqliteStore, StorageError};

use std::collections::HashMap;

/// Errors that can occur during tracker operation
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Facade wiring the habit store, streak engine, and analytics together
///
/// This is the single entry point the presentation layer talks to. Opening a
/// tracker initializes the schema (idempotent, safe on every start); each
/// instance owns its own database connection, so independent trackers can
/// coexist.
pub struct HabitTracker {
    store: SqliteStore,
    streaks: StreakEngine,
    analytics: AnalyticsEngine,
}

impl HabitTracker {
    /// Open a tracker backed by the given database file
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let store = SqliteStore::open(db_path)?;
        Ok(Self::with_store(store))
    }

    /// Open a tracker backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self, TrackerError> {
        let store = SqliteStore::open_in_memory()?;
        Ok(Self::with_store(store))
    }

    fn with_store(store: SqliteStore) -> Self {
        Self {
            store,
            streaks: StreakEngine::new(),
            analytics: AnalyticsEngine::new(),
        }
    }

    /// Create a habit; the new record starts with streak 0
    ///
    /// Fails with a validation error when name or description is empty, and
    /// with a duplicate-name error when the name is already taken. In both
    /// cases the store is left unchanged.
    pub fn create(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        periodicity: Periodicity,
    ) -> Result<Habit, TrackerError> {
        let draft = NewHabit::new(name, description, periodicity)?;
        Ok(self.store.create_habit(&draft)?)
    }

    /// Get a habit by id
    pub fn get(&self, id: HabitId) -> Result<Habit, TrackerError> {
        Ok(self.store.get_habit(id)?)
    }

    /// List habits matching the filter, in insertion order
    pub fn list(&self, filter: HabitFilter) -> Result<Vec<Habit>, TrackerError> {
        Ok(self.store.list_habits(filter)?)
    }

    /// Remove a habit permanently; unknown ids are a no-op
    pub fn delete(&self, id: HabitId) -> Result<(), TrackerError> {
        Ok(self.store.delete_habit(id)?)
    }

    /// Record a completion: the habit's streak increments by one
    pub fn record_completion(&self, id: HabitId) -> Result<(), TrackerError> {
        Ok(self.streaks.record_completion(&self.store, id)?)
    }

    /// Record a miss: the habit's streak resets to zero
    pub fn record_miss(&self, id: HabitId) -> Result<(), TrackerError> {
        Ok(self.streaks.record_miss(&self.store, id)?)
    }

    /// Count of all habits
    pub fn total_count(&self) -> Result<usize, TrackerError> {
        Ok(self.analytics.total_count(&self.store)?)
    }

    /// The habit with the maximum streak, or `None` on an empty store
    pub fn longest_streak(&self) -> Result<Option<StreakEntry>, TrackerError> {
        Ok(self.analytics.longest_streak(&self.store)?)
    }

    /// Habit counts per periodicity; zero counts are omitted
    pub fn count_by_periodicity(&self) -> Result<HashMap<Periodicity, usize>, TrackerError> {
        Ok(self.analytics.count_by_periodicity(&self.store)?)
    }

    /// All habits sorted by streak descending, ties in insertion order
    pub fn ranked_by_streak(&self) -> Result<Vec<StreakEntry>, TrackerError> {
        Ok(self.analytics.ranked_by_streak(&self.store)?)
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }
}
