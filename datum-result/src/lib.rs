//! Error and result types for the datum value layer.
//!
//! Every datum crate reports failures through the single [`Error`] enum and
//! the [`Result<T>`] alias, so errors cross crate boundaries with `?` and
//! callers can match on the variant to decide how to react.
//!
//! # Error Categories
//!
//! - **User input errors** ([`Error::InvalidArgumentError`]): malformed date
//!   text, illegal calendar dates, wrong-kind operands, truncated slot bytes
//! - **Unsupported casts** ([`Error::Unsupported`]): a cast that is not defined
//!   for the requested kind pair (for example DATE to INTEGER)
//! - **Range errors** ([`Error::Overflow`]): results that do not fit the
//!   signed 32-bit payloads (day-counts, float to integer casts)
//! - **Column errors** ([`Error::Arrow`]): failures while building Arrow arrays
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states
//!
//! Malformed *data* never panics; only broken invariants in calling code do.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
