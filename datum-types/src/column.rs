//! Arrow column slots for [`Value`]s.
//!
//! Each [`Kind`] maps to one Arrow array type (see [`Kind::arrow_type`]); a
//! DATE column is a `Date32Array` whose slots are the same day-counts a
//! [`Value::Date`] carries.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Date32Array, Float32Array, Int32Array, StringArray,
};
use datum_result::{Error, Result};

use crate::{Kind, Value};

/// Build a single column of `kind` from `values`.
///
/// # Errors
///
/// [`Error::InvalidArgumentError`] if any value has another kind, or is a
/// DATE that does not name a legal date.
pub fn build_column(kind: Kind, values: &[Value]) -> Result<ArrayRef> {
    for (row, value) in values.iter().enumerate() {
        if value.kind() != kind {
            return Err(Error::InvalidArgumentError(format!(
                "row {row}: cannot store a {} value in a {kind} column",
                value.kind()
            )));
        }
        value.check_storable().map_err(|_| {
            Error::InvalidArgumentError(format!(
                "row {row}: day-count {} does not name a valid DATE",
                value.as_date()
            ))
        })?;
    }

    let array: ArrayRef = match kind {
        Kind::Integer => Arc::new(Int32Array::from_iter_values(
            values.iter().map(Value::as_int),
        )),
        Kind::Float => Arc::new(Float32Array::from_iter_values(
            values.iter().map(Value::as_float),
        )),
        Kind::Boolean => Arc::new(BooleanArray::from(
            values.iter().map(Value::as_boolean).collect::<Vec<_>>(),
        )),
        Kind::Text => Arc::new(StringArray::from_iter_values(
            values.iter().map(|v| v.as_str().unwrap_or_default()),
        )),
        Kind::Date => Arc::new(Date32Array::from_iter_values(
            values.iter().map(Value::as_date),
        )),
    };
    Ok(array)
}

/// The [`Kind`] stored by `array`.
pub fn kind_of_column(array: &dyn Array) -> Result<Kind> {
    Kind::from_arrow_type(array.data_type()).ok_or_else(|| {
        Error::unsupported(format_args!(
            "no value kind for column type {}",
            array.data_type()
        ))
    })
}

fn downcast<'a, A: Array + 'static>(array: &'a dyn Array, kind: Kind) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        Error::Internal(format!(
            "{kind} column is not backed by {}",
            std::any::type_name::<A>()
        ))
    })
}

/// Read slot `idx` of `array` back into a [`Value`].
///
/// # Errors
///
/// [`Error::InvalidArgumentError`] for out-of-range or null slots;
/// [`Error::Unsupported`] for Arrow types with no matching kind.
pub fn value_at(array: &dyn Array, idx: usize) -> Result<Value> {
    let kind = kind_of_column(array)?;
    if idx >= array.len() {
        return Err(Error::InvalidArgumentError(format!(
            "slot {idx} out of range for {kind} column of length {}",
            array.len()
        )));
    }
    if array.is_null(idx) {
        return Err(Error::InvalidArgumentError(format!(
            "slot {idx} of {kind} column is null"
        )));
    }

    let value = match kind {
        Kind::Integer => Value::Integer(downcast::<Int32Array>(array, kind)?.value(idx)),
        Kind::Float => Value::Float(downcast::<Float32Array>(array, kind)?.value(idx)),
        Kind::Boolean => Value::Boolean(downcast::<BooleanArray>(array, kind)?.value(idx)),
        Kind::Text => Value::Text(downcast::<StringArray>(array, kind)?.value(idx).to_owned()),
        Kind::Date => Value::from_day_count(downcast::<Date32Array>(array, kind)?.value(idx))?,
    };
    Ok(value)
}
