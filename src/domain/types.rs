/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, Periodicity, and
/// the list filter that are used by the Habit entity and the storage layer.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Unique identifier for a habit
///
/// This is a wrapper around the row id assigned by the store, kept as a
/// newtype so an id can't be confused with a plain count or streak value.
/// Ids are assigned on creation and never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Raw integer value, as stored in the database
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HabitId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// How often a habit should be performed
///
/// Periodicity is informational metadata: it drives filtering and the
/// per-periodicity counts, but it never triggers any automatic streak
/// mutation. The stored strings `"Daily"` and `"Weekly"` are part of the
/// durable schema contract, so databases written by earlier versions of the
/// application keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// Every single day
    Daily,
    /// Once per week
    Weekly,
}

impl Periodicity {
    /// The exact string stored in the `periodicity` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "Daily",
            Periodicity::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = crate::domain::DomainError;

    /// Parse a periodicity, accepting any casing (`"Daily"`, `"daily"`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(crate::domain::DomainError::InvalidPeriodicity(s.to_string())),
        }
    }
}

/// Filter applied when listing habits
///
/// `All` returns every habit; the other variants restrict the listing to a
/// single periodicity. Listing order is always insertion order (by id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HabitFilter {
    /// Every habit, regardless of periodicity
    #[default]
    All,
    /// Only habits with the given periodicity
    Periodicity(Periodicity),
}

impl HabitFilter {
    /// Convenience constructor for daily-only listings
    pub fn daily() -> Self {
        HabitFilter::Periodicity(Periodicity::Daily)
    }

    /// Convenience constructor for weekly-only listings
    pub fn weekly() -> Self {
        HabitFilter::Periodicity(Periodicity::Weekly)
    }

    /// Whether a habit with the given periodicity passes this filter
    pub fn matches(&self, periodicity: Periodicity) -> bool {
        match self {
            HabitFilter::All => true,
            HabitFilter::Periodicity(p) => *p == periodicity,
        }
    }
}
