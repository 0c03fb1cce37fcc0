//! Error types for registration, session guards and driver I/O.

use std::io;

use thiserror::Error;

/// Library-wide error type for towersort operations.
///
/// The sorting and searching procedures themselves never fail; these errors
/// come from registration, the [`crate::Session`] guards and driver I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Priority outside `1..=10`.
    #[error("Priority {0} is out of range: must be between 1 and 10")]
    PriorityOutOfRange(i64),

    /// Registration would exceed the collection capacity.
    #[error("Collection is full: at most {capacity} components can be registered")]
    CapacityExceeded { capacity: usize },

    /// Operation requires at least one registered component.
    #[error("No components registered")]
    EmptyCollection,

    /// Binary search requested without a prior sort by name.
    #[error("Binary search requires the components to be sorted by name")]
    NotSortedByName,

    /// Input ended before a prompt was answered.
    #[error("Input ended unexpectedly")]
    UnexpectedEof,
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
