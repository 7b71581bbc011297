/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit records. It handles all SQL queries and row
/// conversion.

use std::path::Path;
use std::str::FromStr;
use rusqlite::{params, Connection};

use crate::domain::{Habit, HabitFilter, HabitId, NewHabit, Periodicity};
use crate::storage::{migrations, HabitStore, StorageError};

const HABIT_COLUMNS: &str = "id, name, description, periodicity, streak";

/// SQLite-based storage implementation
///
/// Each instance owns its own connection, so multiple stores (e.g. in tests)
/// can coexist without interference. The connection is closed when the store
/// is dropped.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and ensure the schema exists
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite store initialized at: {}", db_path.display());

        Ok(Self { conn })
    }

    /// Open a private in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Map a rusqlite row with the standard column order to a Habit
    fn habit_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Habit> {
        let periodicity_str: String = row.get(3)?;
        let periodicity = Periodicity::from_str(&periodicity_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                3,
                "Invalid periodicity".to_string(),
                rusqlite::types::Type::Text,
            )
        })?;

        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            row.get(1)?, // name
            row.get(2)?, // description
            periodicity,
            row.get(4)?, // streak
        ))
    }

    /// Whether a rusqlite error is a UNIQUE constraint violation
    fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl HabitStore for SqliteStore {
    /// Insert a new habit and return the stored record with its assigned id
    fn create_habit(&self, habit: &NewHabit) -> Result<Habit, StorageError> {
        let result = self.conn.execute(
            "INSERT INTO habits (name, description, periodicity) VALUES (?1, ?2, ?3)",
            params![
                habit.name(),
                habit.description(),
                habit.periodicity().as_str()
            ],
        );

        match result {
            Ok(_) => {}
            Err(e) if Self::is_unique_violation(&e) => {
                return Err(StorageError::DuplicateName {
                    name: habit.name().to_string(),
                });
            }
            Err(e) => return Err(StorageError::Query(e)),
        }

        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit: {} ({})", habit.name(), id);

        Ok(Habit::from_existing(
            id,
            habit.name().to_string(),
            habit.description().to_string(),
            habit.periodicity(),
            0,
        ))
    }

    /// Get a habit by its id
    fn get_habit(&self, id: HabitId) -> Result<Habit, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM habits WHERE id = ?1",
            HABIT_COLUMNS
        ))?;

        let result = stmt.query_row(params![id.as_i64()], Self::habit_from_row);

        match result {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound { id }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// List habits matching the filter, ordered by id (insertion order)
    fn list_habits(&self, filter: HabitFilter) -> Result<Vec<Habit>, StorageError> {
        let mut habits = Vec::new();

        match filter {
            HabitFilter::All => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {} FROM habits ORDER BY id",
                    HABIT_COLUMNS
                ))?;
                let rows = stmt.query_map([], Self::habit_from_row)?;
                for habit in rows {
                    habits.push(habit?);
                }
            }
            HabitFilter::Periodicity(p) => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {} FROM habits WHERE periodicity = ?1 ORDER BY id",
                    HABIT_COLUMNS
                ))?;
                let rows = stmt.query_map(params![p.as_str()], Self::habit_from_row)?;
                for habit in rows {
                    habits.push(habit?);
                }
            }
        }

        Ok(habits)
    }

    /// Remove a habit; missing ids are a documented no-op
    fn delete_habit(&self, id: HabitId) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id.as_i64()])?;

        if rows_affected == 0 {
            tracing::debug!("Delete of nonexistent habit {} ignored", id);
        } else {
            tracing::debug!("Deleted habit: {}", id);
        }
        Ok(())
    }

    /// Overwrite a habit's streak counter
    fn set_streak(&self, id: HabitId, streak: u32) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE habits SET streak = ?2 WHERE id = ?1",
            params![id.as_i64(), streak],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { id });
        }

        Ok(())
    }
}
