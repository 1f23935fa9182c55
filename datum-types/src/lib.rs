//! Scalar values, DATE calendar arithmetic and per-kind type strategies.
//!
//! - [`Value`]: the tagged scalar container (INTEGER, FLOAT, BOOLEAN, TEXT,
//!   DATE) with best-effort accessors.
//! - [`strategy`]: one [`TypeStrategy`] per [`Kind`] and the static registry
//!   `Value` dispatches through.
//! - [`calendar`]: closed-form conversions between `YYYY-MM-DD` and signed
//!   day-counts since `1970-01-01`.
//! - [`column`]: Arrow column slots for values.
//! - [`internal`]: little-endian slot codecs behind [`Value::to_bytes`].

pub mod calendar;
pub mod column;
pub mod internal;
pub mod kind;
pub mod options;
pub mod strategy;
pub mod value;

pub mod errors;
pub use errors::*;

pub use calendar::{
    INVALID_DAY_COUNT, MIN_DAY_COUNT, date_to_day_count, day_count_to_date, days_in_month,
    format_day_count, is_leap_year, is_valid_date, parse_date_text, parse_day_count,
    try_date_to_day_count,
};
pub use column::{build_column, kind_of_column, value_at};
pub use kind::Kind;
pub use options::DateOptions;
pub use strategy::{
    BooleanType, CAST_COST_INFEASIBLE, DateType, FloatType, IntegerType, TextType, TypeStrategy,
    cast_cost, cheapest_cast, strategy,
};
pub use value::{FLOAT_EPSILON, Value};
