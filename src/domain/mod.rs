/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity, its validated creation draft, the
/// streak transition rules, and the supporting value types.

pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("habit name must not be empty")]
    EmptyName,

    #[error("habit description must not be empty")]
    EmptyDescription,

    #[error("invalid periodicity: {0:?} (expected Daily or Weekly)")]
    InvalidPeriodicity(String),
}
