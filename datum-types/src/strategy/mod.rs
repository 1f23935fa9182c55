//! Per-kind type strategies and the process-wide registry.
//!
//! Every [`Kind`] has exactly one [`TypeStrategy`] implementation. [`Value`]
//! never branches on its own kind for parse/cast/compare/render; it looks up
//! the strategy for its tag with [`strategy`] and delegates. The registry is a
//! `static` table of stateless unit structs, so lookups need no locking and
//! every strategy can be called from any thread.
//!
//! The six trait methods are the whole contract other engine components
//! (planner, casting dispatcher, sort and index code) may rely on.

use std::cmp::Ordering;
use std::fmt;

use arrow::array::{Array, PrimitiveArray};
use arrow::datatypes::ArrowPrimitiveType;
use datum_result::{Error, Result};

use crate::{Kind, Value};

mod boolean;
mod date;
mod float;
mod integer;
mod text;

pub use boolean::BooleanType;
pub use date::DateType;
pub use float::FloatType;
pub use integer::IntegerType;
pub use text::TextType;

/// Cast cost reported for kind pairs that cannot be cast at all.
pub const CAST_COST_INFEASIBLE: u32 = u32::MAX;

/// Kind-specific behavior for one [`Kind`].
pub trait TypeStrategy: Send + Sync + fmt::Debug {
    /// The kind this strategy handles.
    fn kind(&self) -> Kind;

    /// Build a value of this kind from text.
    fn parse(&self, text: &str) -> Result<Value>;

    /// Convert `value` (which must be of this kind) into `target`.
    ///
    /// Identity casts always succeed. Undefined pairs fail with
    /// [`Error::Unsupported`].
    fn cast(&self, value: &Value, target: Kind) -> Result<Value>;

    /// Order two values of this kind.
    ///
    /// Returns `None` ("incomparable") when either operand has another kind or
    /// the payloads have no order (NaN).
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering>;

    /// Order two column slots without materializing [`Value`]s.
    ///
    /// Mismatched array types, null slots and out-of-range indices are
    /// incomparable.
    fn compare_columns(
        &self,
        left: &dyn Array,
        right: &dyn Array,
        left_idx: usize,
        right_idx: usize,
    ) -> Option<Ordering>;

    /// Render a value of this kind as text.
    fn render(&self, value: &Value) -> Result<String>;

    /// Relative cost of an implicit cast to `target`; lower is preferred and
    /// [`CAST_COST_INFEASIBLE`] means the cast is not defined.
    fn cast_cost(&self, target: Kind) -> u32;
}

static INTEGER: IntegerType = IntegerType;
static FLOAT: FloatType = FloatType;
static BOOLEAN: BooleanType = BooleanType;
static TEXT: TextType = TextType;
static DATE: DateType = DateType;

/// Strategy table indexed by [`Kind::index`].
static REGISTRY: [&(dyn TypeStrategy + 'static); 5] = [&INTEGER, &FLOAT, &BOOLEAN, &TEXT, &DATE];

/// Look up the singleton strategy for `kind`.
#[inline]
pub fn strategy(kind: Kind) -> &'static dyn TypeStrategy {
    REGISTRY[kind.index()]
}

/// Cost of casting `from` into `to`, as reported by `from`'s strategy.
#[inline]
pub fn cast_cost(from: Kind, to: Kind) -> u32 {
    strategy(from).cast_cost(to)
}

/// Among `candidates`, the cheapest feasible target for a value of kind `from`.
pub fn cheapest_cast(from: Kind, candidates: &[Kind]) -> Option<Kind> {
    candidates
        .iter()
        .copied()
        .map(|to| (cast_cost(from, to), to))
        .filter(|(cost, _)| *cost != CAST_COST_INFEASIBLE)
        .min_by_key(|(cost, _)| *cost)
        .map(|(_, to)| to)
}

/* ----------------------------- shared helpers ---------------------------- */

/// Reject a value whose kind does not belong to the strategy handling it.
pub(crate) fn ensure_kind(expected: Kind, value: &Value) -> Result<()> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(Error::InvalidArgumentError(format!(
            "{expected} strategy received a {} value",
            value.kind()
        )))
    }
}

pub(crate) fn unsupported_cast(from: Kind, to: Kind) -> Error {
    tracing::debug!(%from, %to, "cast rejected");
    Error::unsupported(format_args!("cannot cast {from} to {to}"))
}

/// Diagnostic for an attempted comparison across kinds.
pub(crate) fn incomparable(strategy: Kind, left: Kind, right: Kind) -> Option<Ordering> {
    tracing::warn!(%strategy, %left, %right, "invalid type to compare");
    None
}

/// Fetch slot `idx` of a primitive Arrow array, or `None` when the array has
/// another type, the index is out of range or the slot is null.
pub(crate) fn primitive_slot<T>(kind: Kind, array: &dyn Array, idx: usize) -> Option<T::Native>
where
    T: ArrowPrimitiveType,
{
    let Some(typed) = array.as_any().downcast_ref::<PrimitiveArray<T>>() else {
        tracing::warn!(%kind, data_type = %array.data_type(), "column type does not match strategy");
        return None;
    };
    slot_index(kind, typed, idx).map(|i| typed.value(i))
}

/// Bounds and null check shared by every columnar comparison.
pub(crate) fn slot_index(kind: Kind, array: &dyn Array, idx: usize) -> Option<usize> {
    if idx >= array.len() {
        tracing::warn!(%kind, idx, len = array.len(), "column index out of range");
        return None;
    }
    if array.is_null(idx) {
        return None;
    }
    Some(idx)
}

/// Compare two primitive slots with the native type's partial order.
pub(crate) fn compare_primitive_slots<T>(
    kind: Kind,
    left: &dyn Array,
    right: &dyn Array,
    left_idx: usize,
    right_idx: usize,
) -> Option<Ordering>
where
    T: ArrowPrimitiveType,
    T::Native: PartialOrd,
{
    let l = primitive_slot::<T>(kind, left, left_idx)?;
    let r = primitive_slot::<T>(kind, right, right_idx)?;
    l.partial_cmp(&r)
}
