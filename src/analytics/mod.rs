/// Analytics engine for summary statistics
///
/// This module derives read-only summary views from the current store
/// contents: total habit count, the longest streak, per-periodicity counts,
/// and the ranked streak listing that drives the streak chart.

use std::collections::HashMap;
use serde::Serialize;

use crate::domain::{HabitFilter, Periodicity};
use crate::storage::{HabitStore, StorageError};

/// A (name, streak) pair in a streak listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakEntry {
    pub name: String,
    pub streak: u32,
}

/// Analytics engine for processing habit data
///
/// The engine is stateless and never mutates the store; every method takes a
/// fresh snapshot of the habits, so results reflect the store at call time.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Count of all habits in the store
    pub fn total_count<S: HabitStore>(&self, store: &S) -> Result<usize, StorageError> {
        Ok(store.list_habits(HabitFilter::All)?.len())
    }

    /// The habit with the maximum streak value
    ///
    /// Returns `None` on an empty store. When several habits tie for the
    /// maximum, which one is returned is unspecified; callers must not rely
    /// on the tie winner.
    pub fn longest_streak<S: HabitStore>(
        &self,
        store: &S,
    ) -> Result<Option<StreakEntry>, StorageError> {
        let habits = store.list_habits(HabitFilter::All)?;

        let mut best: Option<StreakEntry> = None;
        for habit in habits {
            let beats_current = best.as_ref().map_or(true, |b| habit.streak > b.streak);
            if beats_current {
                best = Some(StreakEntry {
                    name: habit.name,
                    streak: habit.streak,
                });
            }
        }

        Ok(best)
    }

    /// Number of habits per periodicity present in the store
    ///
    /// Periodicities with no habits are omitted rather than reported as zero.
    pub fn count_by_periodicity<S: HabitStore>(
        &self,
        store: &S,
    ) -> Result<HashMap<Periodicity, usize>, StorageError> {
        let mut counts = HashMap::new();
        for habit in store.list_habits(HabitFilter::All)? {
            *counts.entry(habit.periodicity).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// All habits sorted by streak, highest first
    ///
    /// The sort is stable, so habits with equal streaks keep their insertion
    /// order. An empty result means there is nothing to display, which is
    /// not an error.
    pub fn ranked_by_streak<S: HabitStore>(
        &self,
        store: &S,
    ) -> Result<Vec<StreakEntry>, StorageError> {
        let mut entries: Vec<StreakEntry> = store
            .list_habits(HabitFilter::All)?
            .into_iter()
            .map(|h| StreakEntry {
                name: h.name,
                streak: h.streak,
            })
            .collect();

        entries.sort_by_key(|e| std::cmp::Reverse(e.streak));
        Ok(entries)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
