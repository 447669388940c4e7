//! Error types for the date selection models.

use horizon_datepicker_core::SignalError;

use crate::selection::SelectionKind;

/// Result type alias for selection model construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a selection model.
///
/// Model operations themselves never fail; absent or invalid dates are
/// treated as "no information".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No date adapter was supplied.
    #[error("No date adapter configured for {kind} selection model")]
    MissingAdapter { kind: SelectionKind },

    /// The initial selection is for the other variant.
    #[error("Initial selection is for a {found} model, expected {expected}")]
    KindMismatch {
        expected: SelectionKind,
        found: SelectionKind,
    },

    /// Signal error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}
