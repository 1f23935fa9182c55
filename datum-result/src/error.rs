use std::fmt;
use thiserror::Error;

/// Unified error type for all datum operations.
///
/// # Error Handling Strategy
///
/// Errors propagate upward with the `?` operator. Parsing, casting and calendar
/// conversion never panic on bad input data; they return one of these variants
/// instead. Sentinel day-counts used internally for "no date" are never
/// surfaced as a successful result.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, so failures from concurrent row
/// construction can be collected on another thread.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input or API parameter.
    ///
    /// Raised for:
    /// - Date text that does not match `YYYY-MM-DD`
    /// - Calendar-illegal dates such as `2021-02-30`
    /// - Text that cannot be parsed as the requested kind
    /// - A value of the wrong kind handed to a kind-specific operation
    /// - Slot bytes that are truncated or not valid UTF-8
    ///
    /// # Recovery
    ///
    /// Recoverable: fix the input and retry. Row construction aborts the row.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// The requested cast is not defined for this pair of kinds, e.g. DATE to
    /// INTEGER.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A computed value does not fit its 32-bit representation.
    ///
    /// Typical sources are calendar dates whose day-count falls outside
    /// `[i32::MIN + 1, i32::MAX]` and float to integer casts of huge or NaN
    /// values.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Arrow library error while building or reading a column.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This should never occur during normal operation. The message describes
    /// the invariant that was found broken.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid-argument error from any displayable message.
    ///
    /// # Examples
    ///
    /// ```
    /// use datum_result::Error;
    ///
    /// fn parse_month(input: &str) -> Result<u32, Error> {
    ///     input.parse::<u32>().map_err(Error::invalid_argument)
    /// }
    ///
    /// assert_eq!(parse_month("7").unwrap(), 7);
    /// assert!(matches!(parse_month("july"), Err(Error::InvalidArgumentError(_))));
    /// ```
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }

    /// Create an unsupported-operation error from any displayable message.
    #[inline]
    pub fn unsupported<E: fmt::Display>(err: E) -> Self {
        Error::Unsupported(err.to_string())
    }

    /// Create an overflow error from any displayable message.
    #[inline]
    pub fn overflow<E: fmt::Display>(err: E) -> Self {
        Error::Overflow(err.to_string())
    }

    /// Returns `true` for errors caused by bad input data rather than by an
    /// undefined operation or a bug.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgumentError(_))
    }
}
