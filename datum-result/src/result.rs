use crate::error::Error;

/// Result type alias used throughout datum.
///
/// Shorthand for `std::result::Result<T, Error>`. Every fallible parse, cast,
/// calendar and column operation returns this type.
pub type Result<T> = std::result::Result<T, Error>;
