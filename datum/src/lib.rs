//! Typed scalar values with calendar-correct DATE support.
//!
//! This crate is the entrypoint for the `datum-*` workspace. It re-exports the
//! value layer and adds [`RowSet`], a small in-memory row store that turns
//! text literals into typed Arrow columns.
//!
//! # Quick Start
//!
//! ```rust
//! use datum::{Kind, RowSet};
//!
//! let mut rows = RowSet::new(vec![("id".into(), Kind::Integer), ("day".into(), Kind::Date)]);
//! rows.insert(&["1", "2020-1-01"]).unwrap();
//! assert!(rows.insert(&["2", "2021-02-30"]).is_err());
//! assert_eq!(rows.select_all(), vec![vec!["1".to_string(), "2020-01-01".to_string()]]);
//! ```
//!
//! # Layout
//!
//! - **Values** (`datum-types`): [`Value`], [`Kind`], the [`strategy`]
//!   registry and [`calendar`] arithmetic.
//! - **Errors** (`datum-result`): the shared [`Error`] and [`Result`].

pub mod rows;

pub use rows::RowSet;

pub use datum_result::{Error, Result};
pub use datum_types::{
    CAST_COST_INFEASIBLE, DateOptions, INVALID_DAY_COUNT, Kind, TypeStrategy, Value, calendar,
    column, strategy,
};
