/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing, querying, and mutating habit records.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::{Habit, HabitFilter, HabitId, NewHabit};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("a habit named {name:?} already exists")]
    DuplicateName { name: String },

    #[error("habit not found: {id}")]
    HabitNotFound { id: HabitId },

    #[error("migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// This trait allows us to potentially swap out SQLite for other databases
/// in the future while keeping the same interface. Every operation runs to
/// completion before returning; each mutation is a single write.
pub trait HabitStore {
    /// Insert a new habit with streak 0 and return the stored record
    ///
    /// Fails with `DuplicateName` when a habit with the same name already
    /// exists; the store is left unchanged in that case.
    fn create_habit(&self, habit: &NewHabit) -> Result<Habit, StorageError>;

    /// Get a habit by id
    fn get_habit(&self, id: HabitId) -> Result<Habit, StorageError>;

    /// List habits matching the filter, in insertion order (by id)
    ///
    /// The result is a fresh snapshot, not a live view.
    fn list_habits(&self, filter: HabitFilter) -> Result<Vec<Habit>, StorageError>;

    /// Remove a habit permanently
    ///
    /// Deleting an id that does not exist is a no-op, not an error.
    fn delete_habit(&self, id: HabitId) -> Result<(), StorageError>;

    /// Overwrite a habit's streak counter
    ///
    /// Fails with `HabitNotFound` when the id does not exist.
    fn set_streak(&self, id: HabitId, streak: u32) -> Result<(), StorageError>;
}
