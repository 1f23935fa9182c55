use std::cmp::Ordering;

use arrow::array::Array;
use arrow::datatypes::Date32Type;
use datum_result::Result;

use super::{
    CAST_COST_INFEASIBLE, TypeStrategy, compare_primitive_slots, ensure_kind, incomparable,
    unsupported_cast,
};
use crate::calendar;
use crate::options::DateOptions;
use crate::{Kind, Value};

/// Strategy for DATE values (day-counts since `1970-01-01`).
///
/// Ordering is plain signed integer ordering of the day-count, which agrees
/// with calendar order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateType;

impl DateType {
    /// Parse a DATE literal, accepting only dates inside `options`' band.
    pub fn parse_with(&self, text: &str, options: &DateOptions) -> Result<Value> {
        calendar::parse_day_count_with(text, options).map(Value::Date)
    }
}

impl TypeStrategy for DateType {
    fn kind(&self) -> Kind {
        Kind::Date
    }

    fn parse(&self, text: &str) -> Result<Value> {
        calendar::parse_day_count(text).map(Value::Date)
    }

    fn cast(&self, value: &Value, target: Kind) -> Result<Value> {
        ensure_kind(Kind::Date, value)?;
        match target {
            Kind::Date => Ok(value.clone()),
            Kind::Text => self.render(value).map(Value::Text),
            Kind::Integer | Kind::Float | Kind::Boolean => {
                Err(unsupported_cast(Kind::Date, target))
            }
        }
    }

    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            _ => incomparable(Kind::Date, left.kind(), right.kind()),
        }
    }

    fn compare_columns(
        &self,
        left: &dyn Array,
        right: &dyn Array,
        left_idx: usize,
        right_idx: usize,
    ) -> Option<Ordering> {
        compare_primitive_slots::<Date32Type>(Kind::Date, left, right, left_idx, right_idx)
    }

    fn render(&self, value: &Value) -> Result<String> {
        ensure_kind(Kind::Date, value)?;
        calendar::format_day_count(value.as_date())
    }

    fn cast_cost(&self, target: Kind) -> u32 {
        match target {
            Kind::Date => 0,
            Kind::Text => 2,
            Kind::Integer | Kind::Float | Kind::Boolean => CAST_COST_INFEASIBLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::{Date32Array, Int32Array};

    use datum_result::Error;

    use super::*;
    use crate::calendar::INVALID_DAY_COUNT;

    #[test]
    fn parse_normalizes_and_validates() {
        assert_eq!(DateType.parse("2020-1-01").unwrap(), Value::Date(18262));
        assert!(matches!(
            DateType.parse("2021-02-30"),
            Err(Error::InvalidArgumentError(_))
        ));
        assert!(matches!(
            DateType.parse("2021/02/03"),
            Err(Error::InvalidArgumentError(_))
        ));
    }

    #[test]
    fn parse_with_honors_options() {
        let opts = DateOptions::post_epoch();
        assert!(DateType.parse_with("1969-12-31", &opts).is_err());
        assert_eq!(
            DateType.parse_with("1970-01-01", &opts).unwrap(),
            Value::Date(0)
        );
    }

    #[test]
    fn only_text_is_reachable() {
        let d = Value::Date(24855);
        assert_eq!(
            DateType.cast(&d, Kind::Text).unwrap(),
            Value::Text("2038-01-19".into())
        );
        assert_eq!(DateType.cast(&d, Kind::Date).unwrap(), d);
        for kind in [Kind::Integer, Kind::Float, Kind::Boolean] {
            assert!(matches!(
                DateType.cast(&d, kind),
                Err(Error::Unsupported(_))
            ));
        }
    }

    #[test]
    fn compare_follows_calendar_order() {
        assert_eq!(
            DateType.compare(&Value::Date(-1), &Value::Date(0)),
            Some(Ordering::Less)
        );
        assert_eq!(DateType.compare(&Value::Date(0), &Value::Integer(0)), None);
    }

    #[test]
    fn columnar_compare_requires_date32() {
        let dates = Date32Array::from(vec![18282, 18556]);
        let ints = Int32Array::from(vec![18282, 18556]);
        assert_eq!(
            DateType.compare_columns(&dates, &dates, 0, 1),
            Some(Ordering::Less)
        );
        assert_eq!(DateType.compare_columns(&dates, &ints, 0, 0), None);
    }

    #[test]
    fn sentinel_does_not_render() {
        assert!(DateType.render(&Value::Date(INVALID_DAY_COUNT)).is_err());
        assert!(DateType.render(&Value::Integer(0)).is_err());
    }
}
