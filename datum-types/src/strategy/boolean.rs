use std::cmp::Ordering;

use arrow::array::{Array, BooleanArray};
use datum_result::{Error, Result};

use super::{
    CAST_COST_INFEASIBLE, TypeStrategy, ensure_kind, incomparable, slot_index, unsupported_cast,
};
use crate::{Kind, Value};

/// Strategy for BOOLEAN values.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanType;

impl BooleanType {
    fn slot(array: &dyn Array, idx: usize) -> Option<bool> {
        let Some(typed) = array.as_any().downcast_ref::<BooleanArray>() else {
            tracing::warn!(data_type = %array.data_type(), "column type does not match booleans strategy");
            return None;
        };
        slot_index(Kind::Boolean, typed, idx).map(|i| typed.value(i))
    }
}

impl TypeStrategy for BooleanType {
    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn parse(&self, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
            Ok(Value::Boolean(true))
        } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
            Ok(Value::Boolean(false))
        } else {
            Err(Error::InvalidArgumentError(format!(
                "invalid boolean literal '{text}'"
            )))
        }
    }

    fn cast(&self, value: &Value, target: Kind) -> Result<Value> {
        ensure_kind(Kind::Boolean, value)?;
        let v = value.as_boolean();
        match target {
            Kind::Boolean => Ok(Value::Boolean(v)),
            Kind::Integer => Ok(Value::Integer(i32::from(v))),
            Kind::Float => Ok(Value::Float(f32::from(u8::from(v)))),
            Kind::Text => Ok(Value::Text(v.to_string())),
            Kind::Date => Err(unsupported_cast(Kind::Boolean, target)),
        }
    }

    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            _ => incomparable(Kind::Boolean, left.kind(), right.kind()),
        }
    }

    fn compare_columns(
        &self,
        left: &dyn Array,
        right: &dyn Array,
        left_idx: usize,
        right_idx: usize,
    ) -> Option<Ordering> {
        let l = Self::slot(left, left_idx)?;
        let r = Self::slot(right, right_idx)?;
        Some(l.cmp(&r))
    }

    fn render(&self, value: &Value) -> Result<String> {
        ensure_kind(Kind::Boolean, value)?;
        Ok(value.as_boolean().to_string())
    }

    fn cast_cost(&self, target: Kind) -> u32 {
        match target {
            Kind::Boolean => 0,
            Kind::Integer | Kind::Float => 1,
            Kind::Text => 2,
            Kind::Date => CAST_COST_INFEASIBLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_words_and_digits() {
        assert_eq!(BooleanType.parse(" TRUE ").unwrap(), Value::Boolean(true));
        assert_eq!(BooleanType.parse("0").unwrap(), Value::Boolean(false));
        assert!(BooleanType.parse("yes").is_err());
    }

    #[test]
    fn false_sorts_before_true() {
        assert_eq!(
            BooleanType.compare(&Value::Boolean(false), &Value::Boolean(true)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn columnar_compare_skips_nulls() {
        let col = BooleanArray::from(vec![Some(true), None, Some(false)]);
        assert_eq!(
            BooleanType.compare_columns(&col, &col, 0, 2),
            Some(Ordering::Greater)
        );
        assert_eq!(BooleanType.compare_columns(&col, &col, 0, 1), None);
        assert_eq!(BooleanType.compare_columns(&col, &col, 0, 9), None);
    }
}
