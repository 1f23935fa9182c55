use std::cmp::Ordering;
use std::num::IntErrorKind;

use arrow::array::Array;
use arrow::datatypes::Int32Type;
use datum_result::{Error, Result};

use super::{
    CAST_COST_INFEASIBLE, TypeStrategy, compare_primitive_slots, ensure_kind, incomparable,
    unsupported_cast,
};
use crate::{Kind, Value};

/// Strategy for 32-bit signed INTEGER values.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerType;

impl TypeStrategy for IntegerType {
    fn kind(&self) -> Kind {
        Kind::Integer
    }

    fn parse(&self, text: &str) -> Result<Value> {
        text.trim()
            .parse::<i32>()
            .map(Value::Integer)
            .map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Error::overflow(format_args!("'{text}' does not fit in a 32-bit integer"))
                }
                _ => Error::InvalidArgumentError(format!("invalid integer literal '{text}'")),
            })
    }

    fn cast(&self, value: &Value, target: Kind) -> Result<Value> {
        ensure_kind(Kind::Integer, value)?;
        let v = value.as_int();
        match target {
            Kind::Integer => Ok(Value::Integer(v)),
            Kind::Float => Ok(Value::Float(v as f32)),
            Kind::Boolean => Ok(Value::Boolean(v != 0)),
            Kind::Text => Ok(Value::Text(v.to_string())),
            Kind::Date => Err(unsupported_cast(Kind::Integer, target)),
        }
    }

    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            _ => incomparable(Kind::Integer, left.kind(), right.kind()),
        }
    }

    fn compare_columns(
        &self,
        left: &dyn Array,
        right: &dyn Array,
        left_idx: usize,
        right_idx: usize,
    ) -> Option<Ordering> {
        compare_primitive_slots::<Int32Type>(Kind::Integer, left, right, left_idx, right_idx)
    }

    fn render(&self, value: &Value) -> Result<String> {
        ensure_kind(Kind::Integer, value)?;
        Ok(value.as_int().to_string())
    }

    fn cast_cost(&self, target: Kind) -> u32 {
        match target {
            Kind::Integer => 0,
            Kind::Float => 1,
            Kind::Boolean => 2,
            Kind::Text => 3,
            Kind::Date => CAST_COST_INFEASIBLE,
        }
    }
}
