use std::cmp::Ordering;

use arrow::array::{Array, StringArray};
use datum_result::{Error, Result};

use super::{TypeStrategy, ensure_kind, incomparable, slot_index};
use crate::{Kind, Value, calendar};

/// Strategy for CHARS (owned UTF-8 text) values.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextType;

impl TextType {
    fn slot(array: &dyn Array, idx: usize) -> Option<&str> {
        let Some(typed) = array.as_any().downcast_ref::<StringArray>() else {
            tracing::warn!(data_type = %array.data_type(), "column type does not match chars strategy");
            return None;
        };
        slot_index(Kind::Text, typed, idx).map(|i| typed.value(i))
    }
}

impl TypeStrategy for TextType {
    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(Value::Text(text.to_owned()))
    }

    fn cast(&self, value: &Value, target: Kind) -> Result<Value> {
        ensure_kind(Kind::Text, value)?;
        let text = value.as_str().unwrap_or_default();
        match target {
            Kind::Text => Ok(value.clone()),
            Kind::Integer => text.trim().parse::<i32>().map(Value::Integer).map_err(|_| {
                tracing::debug!(text, "cast to ints rejected");
                Error::InvalidArgumentError(format!("cannot cast '{text}' to ints"))
            }),
            Kind::Float => text.trim().parse::<f32>().map(Value::Float).map_err(|_| {
                tracing::debug!(text, "cast to floats rejected");
                Error::InvalidArgumentError(format!("cannot cast '{text}' to floats"))
            }),
            Kind::Boolean => Ok(Value::Boolean(value.as_boolean())),
            Kind::Date => calendar::parse_day_count(text).map(Value::Date),
        }
    }

    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Text(a), Value::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            _ => incomparable(Kind::Text, left.kind(), right.kind()),
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
        Some(l.as_bytes().cmp(r.as_bytes()))
    }

    fn render(&self, value: &Value) -> Result<String> {
        ensure_kind(Kind::Text, value)?;
        Ok(value.as_str().unwrap_or_default().to_owned())
    }

    fn cast_cost(&self, target: Kind) -> u32 {
        match target {
            Kind::Text => 0,
            Kind::Date => 1,
            Kind::Integer | Kind::Float | Kind::Boolean => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_casts_are_strict() {
        let v = Value::from("42");
        assert_eq!(TextType.cast(&v, Kind::Integer).unwrap(), Value::Integer(42));
        assert!(matches!(
            TextType.cast(&Value::from("4x"), Kind::Integer),
            Err(Error::InvalidArgumentError(_))
        ));
        assert!(matches!(
            TextType.cast(&Value::from("abc"), Kind::Float),
            Err(Error::InvalidArgumentError(_))
        ));
    }

    #[test]
    fn boolean_cast_is_lenient() {
        assert_eq!(
            TextType.cast(&Value::from("abc"), Kind::Boolean).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            TextType.cast(&Value::from("2.5"), Kind::Boolean).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn date_cast_validates() {
        assert_eq!(
            TextType.cast(&Value::from("2020-1-21"), Kind::Date).unwrap(),
            Value::Date(18282)
        );
        assert!(TextType.cast(&Value::from("2021-02-30"), Kind::Date).is_err());
    }

    #[test]
    fn compares_bytewise() {
        assert_eq!(
            TextType.compare(&Value::from("B"), &Value::from("a")),
            Some(Ordering::Less)
        );
        let col = StringArray::from(vec!["apple", "banana"]);
        assert_eq!(
            TextType.compare_columns(&col, &col, 1, 0),
            Some(Ordering::Greater)
        );
    }
}
