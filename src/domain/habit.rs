/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user tracks, along with the validated draft used at creation
/// time.

use serde::{Deserialize, Serialize};
use crate::domain::{DomainError, HabitId, Periodicity};

/// A habit the user wants to do regularly
///
/// This is the sole entity in the system. The id is assigned by the store on
/// creation; name and periodicity are immutable afterwards (there is no
/// rename operation). The streak counter is only ever changed through the
/// streak engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned unique identifier
    pub id: HabitId,
    /// Display name, unique across all habits (case-sensitive)
    pub name: String,
    /// Free-form description of the habit
    pub description: String,
    /// Daily or Weekly cadence; informational only
    pub periodicity: Periodicity,
    /// Consecutive completions since the last miss
    pub streak: u32,
}

impl Habit {
    /// Build a habit from already-persisted data
    ///
    /// Used by the storage layer when loading rows; assumes the fields were
    /// validated when the record was first created.
    pub fn from_existing(
        id: HabitId,
        name: String,
        description: String,
        periodicity: Periodicity,
        streak: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            periodicity,
            streak,
        }
    }
}

/// Validated draft for creating a habit
///
/// Creation is the only place field validation happens, so the store can
/// accept a `NewHabit` knowing its fields are well-formed. The streak of a
/// new habit is always zero; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    name: String,
    description: String,
    periodicity: Periodicity,
}

impl NewHabit {
    /// Validate and build a creation draft
    ///
    /// Fails if the name or description is empty or whitespace-only. The
    /// periodicity is an enum, so an unrecognized cadence is rejected
    /// earlier, when parsing (`Periodicity::from_str`).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        periodicity: Periodicity,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if description.trim().is_empty() {
            return Err(DomainError::EmptyDescription);
        }

        Ok(Self {
            name,
            description,
            periodicity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }
}
