/// Database migration management
///
/// This module handles creating and updating the SQLite schema. The habits
/// table layout is a durable contract: databases written by earlier versions
/// of the application must keep loading unchanged, so migration v1 only
/// creates what is missing.

use rusqlite::Connection;
use crate::storage::StorageError;

/// Current database schema version
///
/// Increment this when you add new migrations
const CURRENT_VERSION: i32 = 1;

/// Initialize the database schema
///
/// Creates all required tables and indexes if they don't exist and records
/// the schema version for future migrations. Idempotent; safe to call on
/// every process start. A database without a version record (including one
/// created by an earlier version of the application) is treated as version 0
/// and migrated forward.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let current_version = get_current_version(conn)?;

    if current_version < CURRENT_VERSION {
        run_migrations(conn, current_version)?;
        set_version(conn, CURRENT_VERSION)?;
    }

    Ok(())
}

/// Get the current database schema version
fn get_current_version(conn: &Connection) -> Result<i32, StorageError> {
    let version = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get::<_, i32>(0)
        })
        .unwrap_or(0); // No version record means a fresh or legacy database

    Ok(version)
}

/// Set the database schema version
fn set_version(conn: &Connection, version: i32) -> Result<(), StorageError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run database migrations from the current version to the latest
fn run_migrations(conn: &Connection, from_version: i32) -> Result<(), StorageError> {
    if from_version < 1 {
        migration_v1(conn)?;
    }

    // Future migrations would go here:
    // if from_version < 2 {
    //     migration_v2(conn)?;
    // }

    Ok(())
}

/// Migration to version 1: create the habits table
///
/// Column layout is the durable contract. AUTOINCREMENT keeps deleted ids
/// from ever being reused.
fn migration_v1(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            description TEXT NOT NULL,
            periodicity TEXT NOT NULL,
            streak INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )?;

    // Index for the Daily/Weekly listing filter
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_habits_periodicity
         ON habits (periodicity)",
        [],
    )?;

    tracing::info!("Applied migration v1: created habits table");
    Ok(())
}
