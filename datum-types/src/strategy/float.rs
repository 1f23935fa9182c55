use std::cmp::Ordering;

use arrow::array::Array;
use arrow::datatypes::Float32Type;
use datum_result::{Error, Result};

use super::{
    CAST_COST_INFEASIBLE, TypeStrategy, compare_primitive_slots, ensure_kind, incomparable,
    unsupported_cast,
};
use crate::value::FLOAT_EPSILON;
use crate::{Kind, Value};

/// Strategy for 32-bit FLOAT values.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatType;

// i32::MAX is not representable as f32; 2^31 is the first value past it.
const I32_UPPER_EXCLUSIVE: f32 = 2_147_483_648.0;
const I32_LOWER_INCLUSIVE: f32 = -2_147_483_648.0;

impl TypeStrategy for FloatType {
    fn kind(&self) -> Kind {
        Kind::Float
    }

    fn parse(&self, text: &str) -> Result<Value> {
        text.trim()
            .parse::<f32>()
            .map(Value::Float)
            .map_err(|_| Error::InvalidArgumentError(format!("invalid float literal '{text}'")))
    }

    fn cast(&self, value: &Value, target: Kind) -> Result<Value> {
        ensure_kind(Kind::Float, value)?;
        let v = value.as_float();
        match target {
            Kind::Float => Ok(Value::Float(v)),
            Kind::Integer => {
                let truncated = v.trunc();
                if !(I32_LOWER_INCLUSIVE..I32_UPPER_EXCLUSIVE).contains(&truncated) {
                    return Err(Error::overflow(format_args!(
                        "float {v} does not fit in a 32-bit integer"
                    )));
                }
                Ok(Value::Integer(truncated as i32))
            }
            Kind::Boolean => Ok(Value::Boolean(v.abs() >= FLOAT_EPSILON)),
            Kind::Text => self.render(value).map(Value::Text),
            Kind::Date => Err(unsupported_cast(Kind::Float, target)),
        }
    }

    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => incomparable(Kind::Float, left.kind(), right.kind()),
        }
    }

    fn compare_columns(
        &self,
        left: &dyn Array,
        right: &dyn Array,
        left_idx: usize,
        right_idx: usize,
    ) -> Option<Ordering> {
        compare_primitive_slots::<Float32Type>(Kind::Float, left, right, left_idx, right_idx)
    }

    fn render(&self, value: &Value) -> Result<String> {
        ensure_kind(Kind::Float, value)?;
        Ok(value.as_float().to_string())
    }

    fn cast_cost(&self, target: Kind) -> u32 {
        match target {
            Kind::Float => 0,
            Kind::Integer => 1,
            Kind::Boolean => 2,
            Kind::Text => 3,
            Kind::Date => CAST_COST_INFEASIBLE,
        }
    }
}
