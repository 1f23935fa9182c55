//! The tagged scalar container.
//!
//! A [`Value`] holds exactly one of an INTEGER, FLOAT, BOOLEAN, TEXT or DATE
//! payload. Everything kind-specific (parsing, casting, comparison, rendering)
//! is delegated to the [`TypeStrategy`](crate::strategy::TypeStrategy)
//! registered for the value's [`Kind`].
//!
//! ## Ownership
//!
//! TEXT is the only heap payload and it is owned exclusively: `clone` deep
//! copies the buffer, a move transfers it, [`Value::take`] leaves an empty
//! TEXT behind and dropping the value releases it. Every other kind is an
//! inline 4-byte (1 for BOOLEAN) scalar.
//!
//! ## DATE payloads
//!
//! A DATE holds an `i32` day-count since `1970-01-01`, with the same width and
//! byte layout as an INTEGER. The checked constructors only ever produce legal
//! day-counts; [`INVALID_DAY_COUNT`] is the single sentinel for "no date" and
//! rendering or casting it fails instead of printing a made-up date.
//!
//! ## Lenient accessors
//!
//! `as_int`, `as_float`, `as_boolean`, `as_text` and `as_date` never fail.
//! They coerce on a best-effort basis and fall back to `0` / `0.0` / `false` /
//! `""` when the payload cannot be interpreted. Only these accessors are
//! lenient; the strategy operations report errors.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use datum_result::{Error, Result};

use crate::calendar::{self, INVALID_DAY_COUNT};
use crate::internal::{Bool, Codec, EncodeInto, LeF32, LeI32, Utf8};
use crate::strategy::strategy;
use crate::Kind;

/// Tolerance used when reading a FLOAT as a BOOLEAN.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// A scalar value of one of the five supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Boolean(bool),
    Text(String),
    /// Days since `1970-01-01`.
    Date(i32),
}

macro_rules! impl_from_for_value {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(Integer, i8, i16, i32, u8, u16);
impl_from_for_value!(Float, f32);
impl_from_for_value!(Boolean, bool);
impl_from_for_value!(Text, String, &str);

impl Default for Value {
    /// An empty TEXT value, the state a value is left in by [`Value::take`].
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl Value {
    /* ---------------------------- construction ---------------------------- */

    /// Build a value of `kind` from text using that kind's strategy.
    ///
    /// For [`Kind::Date`] the text must match `YYYY-MM-DD` and name a legal
    /// calendar day; otherwise this fails with
    /// [`Error::InvalidArgumentError`].
    pub fn from_text(kind: Kind, text: &str) -> Result<Value> {
        strategy(kind).parse(text)
    }

    /// A DATE value for a calendar date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Value> {
        calendar::try_date_to_day_count(year, month, day).map(Value::Date)
    }

    /// A DATE value for an existing day-count, rejecting the sentinel and any
    /// day-count before `0001-01-01`.
    pub fn from_day_count(day_count: i32) -> Result<Value> {
        let value = Value::Date(day_count);
        value.check_storable()?;
        Ok(value)
    }

    /// Lenient DATE loader used by bulk ingestion.
    ///
    /// Legal date text becomes a DATE; anything else is kept verbatim as TEXT
    /// so the row can report it later instead of silently storing the epoch.
    pub fn try_date_from_text(text: &str) -> Value {
        match calendar::parse_day_count(text) {
            Ok(days) => Value::Date(days),
            Err(err) => {
                tracing::debug!(literal = text, %err, "keeping DATE literal as text");
                Value::Text(text.to_owned())
            }
        }
    }

    /// Decode a value of `kind` from its raw slot bytes.
    ///
    /// Fixed-width kinds read the first `width` bytes (little-endian), TEXT
    /// reads the whole slice as UTF-8. DATE slots are re-validated.
    pub fn from_bytes(kind: Kind, bytes: &[u8]) -> Result<Value> {
        match kind {
            Kind::Integer => Ok(Value::Integer(LeI32::decode(bytes)?)),
            Kind::Float => Ok(Value::Float(LeF32::decode(bytes)?)),
            Kind::Boolean => Ok(Value::Boolean(Bool::decode(bytes)?)),
            Kind::Text => Ok(Value::Text(Utf8::decode(bytes)?)),
            Kind::Date => Value::from_day_count(LeI32::decode(bytes)?),
        }
    }

    /* ------------------------------ metadata ------------------------------ */

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::Text(_) => Kind::Text,
            Value::Date(_) => Kind::Date,
        }
    }

    /// Byte length of the payload as stored.
    pub fn length(&self) -> usize {
        match self {
            Value::Text(s) => s.len(),
            other => other.kind().fixed_width().unwrap_or_default(),
        }
    }

    /* ------------------------ strategy delegation ------------------------- */

    /// Convert into `target` through this value's strategy.
    pub fn cast_to(&self, target: Kind) -> Result<Value> {
        strategy(self.kind()).cast(self, target)
    }

    /// Order against `other`; `None` if the kinds differ or the payloads have
    /// no order.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        strategy(self.kind()).compare(self, other)
    }

    /// Total order for sort and index code.
    ///
    /// Values of different kinds order by kind tag. Within a kind the
    /// strategy's order is used; NaN floats, which have none, sort after
    /// every other float regardless of sign bit.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        if self.kind() != other.kind() {
            return self.kind().cmp(&other.kind());
        }
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            },
            _ => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }

    /// Render through this value's strategy.
    pub fn render(&self) -> Result<String> {
        strategy(self.kind()).render(self)
    }

    /* --------------------------- raw byte view ---------------------------- */

    /// The payload bytes as a storage slot holds them.
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        if let Value::Text(s) = self {
            return Cow::Borrowed(s.as_bytes());
        }
        let mut out = Vec::with_capacity(4);
        match self {
            Value::Integer(v) | Value::Date(v) => v.encode_into(&mut out),
            Value::Float(v) => v.encode_into(&mut out),
            Value::Boolean(v) => v.encode_into(&mut out),
            Value::Text(_) => {}
        }
        Cow::Owned(out)
    }

    /* ------------------------ kind-specific access ------------------------ */

    /// The day-count of a DATE value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgumentError`] if this is not a DATE.
    pub fn try_day_count(&self) -> Result<i32> {
        match self {
            Value::Date(days) => Ok(*days),
            other => Err(Error::InvalidArgumentError(format!(
                "expected a dates value, got {}",
                other.kind()
            ))),
        }
    }

    /// The day-count of a DATE value.
    ///
    /// # Panics
    ///
    /// Panics if this is not a DATE. Reaching that is a bug in the caller, not
    /// bad data; use [`Value::try_day_count`] when the kind is not known.
    pub fn day_count(&self) -> i32 {
        match self {
            Value::Date(days) => *days,
            other => panic!("day_count called on a {} value", other.kind()),
        }
    }

    /// The TEXT payload, if this is TEXT.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /* ------------------------ lenient accessors --------------------------- */

    /// Best-effort integer: floats truncate, booleans are `0`/`1`, text is
    /// parsed (`0` if it is not an integer), a DATE yields its day-count.
    pub fn as_int(&self) -> i32 {
        match self {
            Value::Integer(v) | Value::Date(v) => *v,
            Value::Float(v) => *v as i32,
            Value::Boolean(v) => i32::from(*v),
            Value::Text(s) => s.trim().parse::<i32>().unwrap_or_else(|err| {
                tracing::trace!(text = %s, %err, "failed to convert string to number");
                0
            }),
        }
    }

    /// Best-effort float, `0.0` for text that is not a number.
    pub fn as_float(&self) -> f32 {
        match self {
            Value::Integer(v) | Value::Date(v) => *v as f32,
            Value::Float(v) => *v,
            Value::Boolean(v) => f32::from(u8::from(*v)),
            Value::Text(s) => s.trim().parse::<f32>().unwrap_or_else(|err| {
                tracing::trace!(text = %s, %err, "failed to convert string to float");
                0.0
            }),
        }
    }

    /// Best-effort truth value.
    ///
    /// Numbers are true when non-zero (floats beyond [`FLOAT_EPSILON`]). Text
    /// is true for `true` or a non-zero number, false for `false`, zero and
    /// anything unparseable. A DATE is true unless it is the epoch.
    pub fn as_boolean(&self) -> bool {
        match self {
            Value::Integer(v) | Value::Date(v) => *v != 0,
            Value::Float(v) => v.abs() >= FLOAT_EPSILON,
            Value::Boolean(v) => *v,
            Value::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    true
                } else if s.eq_ignore_ascii_case("false") {
                    false
                } else if let Ok(f) = s.parse::<f32>() {
                    f.abs() >= FLOAT_EPSILON
                } else {
                    tracing::trace!(text = s, "failed to convert string to boolean");
                    false
                }
            }
        }
    }

    /// Rendered text, or `""` if this value cannot be rendered.
    pub fn as_text(&self) -> String {
        self.render().unwrap_or_else(|err| {
            tracing::warn!(kind = %self.kind(), %err, "failed to convert value to string");
            String::new()
        })
    }

    /// Best-effort day-count: a DATE's own payload, parsed date text, or `0`.
    pub fn as_date(&self) -> i32 {
        match self {
            Value::Date(days) => *days,
            Value::Text(s) => calendar::parse_day_count(s).unwrap_or_else(|err| {
                tracing::trace!(text = %s, %err, "failed to convert string to date");
                0
            }),
            other => {
                tracing::warn!(kind = %other.kind(), "cannot convert to date");
                0
            }
        }
    }

    /// True for the "no date" sentinel.
    #[inline]
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Value::Date(INVALID_DAY_COUNT))
    }

    /// Reject a DATE whose day-count does not name a legal date (the sentinel
    /// or anything before `0001-01-01`). Every other value passes.
    pub fn check_storable(&self) -> Result<()> {
        match self {
            Value::Date(days) if !calendar::is_valid_day_count(*days) => {
                Err(Error::InvalidArgumentError(format!(
                    "day-count {days} does not name a valid DATE"
                )))
            }
            _ => Ok(()),
        }
    }

    /* ---------------------------- ownership ------------------------------- */

    /// Overwrite `self` with a copy of `other`.
    ///
    /// TEXT into TEXT reuses the existing buffer; any other combination drops
    /// the old payload before storing the new one.
    pub fn assign(&mut self, other: &Value) {
        match (&mut *self, other) {
            (Value::Text(dst), Value::Text(src)) => dst.clone_from(src),
            _ => *self = other.clone(),
        }
    }

    /// Move the payload out, leaving an empty TEXT value of length 0.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            other => f.write_str(&other.as_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MIN_DAY_COUNT;

    #[test]
    fn kinds_and_lengths() {
        assert_eq!(Value::from(7).kind(), Kind::Integer);
        assert_eq!(Value::from(7).length(), 4);
        assert_eq!(Value::from(1.5f32).length(), 4);
        assert_eq!(Value::from(true).length(), 1);
        assert_eq!(Value::from("hello").length(), 5);
        assert_eq!(Value::date(2020, 1, 21).unwrap().length(), 4);
    }

    #[test]
    fn clone_deep_copies_text() {
        let original = Value::from("abc");
        let mut copy = original.clone();
        if let Value::Text(s) = &mut copy {
            s.push('d');
        }
        assert_eq!(original.as_str(), Some("abc"));
        assert_eq!(copy.as_str(), Some("abcd"));
    }

    #[test]
    fn take_leaves_empty_text() {
        let mut v = Value::from("payload");
        let moved = v.take();
        assert_eq!(moved.as_str(), Some("payload"));
        assert_eq!(v, Value::Text(String::new()));
        assert_eq!(v.length(), 0);
    }

    #[test]
    fn assign_replaces_payload() {
        let mut v = Value::from("old text");
        v.assign(&Value::date(2020, 10, 21).unwrap());
        assert_eq!(v.kind(), Kind::Date);
        assert_eq!(v.as_text(), "2020-10-21");

        v.assign(&Value::from("x"));
        assert_eq!(v.as_str(), Some("x"));

        let same = v.clone();
        v.assign(&same);
        assert_eq!(v.as_str(), Some("x"));
    }

    #[test]
    fn lenient_int_fallbacks() {
        assert_eq!(Value::from(" 42 ").as_int(), 42);
        assert_eq!(Value::from("forty-two").as_int(), 0);
        assert_eq!(Value::from(3.9f32).as_int(), 3);
        assert_eq!(Value::from(-3.9f32).as_int(), -3);
        assert_eq!(Value::from(true).as_int(), 1);
        assert_eq!(Value::Date(18_282).as_int(), 18_282);
    }

    #[test]
    fn lenient_float_fallbacks() {
        assert_eq!(Value::from("2.5").as_float(), 2.5);
        assert_eq!(Value::from("n/a").as_float(), 0.0);
        assert_eq!(Value::from(false).as_float(), 0.0);
        assert_eq!(Value::from(9).as_float(), 9.0);
    }

    #[test]
    fn lenient_boolean_fallbacks() {
        assert!(Value::from("TRUE").as_boolean());
        assert!(!Value::from("false").as_boolean());
        assert!(Value::from("0.5").as_boolean());
        assert!(!Value::from("0").as_boolean());
        assert!(!Value::from("maybe").as_boolean());
        assert!(!Value::from(0.0000001f32).as_boolean());
        assert!(Value::from(-2).as_boolean());
        assert!(!Value::Date(0).as_boolean());
    }

    #[test]
    fn lenient_date_fallbacks() {
        assert_eq!(Value::from("2020-01-21").as_date(), 18_282);
        assert_eq!(Value::from("2021-02-30").as_date(), 0);
        assert_eq!(Value::from(5).as_date(), 0);
    }

    #[test]
    fn day_count_accessors() {
        let d = Value::date(1970, 1, 2).unwrap();
        assert_eq!(d.day_count(), 1);
        assert_eq!(d.try_day_count().unwrap(), 1);
        assert!(matches!(
            Value::from(1).try_day_count(),
            Err(Error::InvalidArgumentError(_))
        ));
    }

    #[test]
    #[should_panic(expected = "day_count called on a ints value")]
    fn day_count_on_integer_panics() {
        Value::from(1).day_count();
    }

    #[test]
    fn raw_bytes_share_integer_layout() {
        let date = Value::Date(24_855);
        let int = Value::Integer(24_855);
        assert_eq!(date.to_bytes(), int.to_bytes());
        assert_eq!(date.to_bytes().as_ref(), &24_855i32.to_le_bytes());
        assert_eq!(Value::from("hi").to_bytes().as_ref(), b"hi");
        assert_eq!(Value::from(true).to_bytes().as_ref(), &[1]);
    }

    #[test]
    fn from_bytes_validates_dates() {
        let bytes = 18_282i32.to_le_bytes();
        assert_eq!(
            Value::from_bytes(Kind::Date, &bytes).unwrap(),
            Value::Date(18_282)
        );
        assert_eq!(
            Value::from_bytes(Kind::Integer, &bytes).unwrap(),
            Value::Integer(18_282)
        );
        assert!(Value::from_bytes(Kind::Date, &INVALID_DAY_COUNT.to_le_bytes()).is_err());
        assert!(Value::from_bytes(Kind::Date, &[0, 0]).is_err());
        assert!(Value::from_bytes(Kind::Text, &[0xC3]).is_err());
    }

    #[test]
    fn negative_nan_sorts_last() {
        let neg_nan = Value::Float(f32::from_bits(0xFFC0_0000));
        assert!(neg_nan.as_float().is_nan());
        assert_eq!(neg_nan.total_cmp(&Value::Float(1.0)), Ordering::Greater);
        assert_eq!(Value::Float(f32::MAX).total_cmp(&neg_nan), Ordering::Less);
        assert_eq!(neg_nan.total_cmp(&Value::Float(f32::NAN)), Ordering::Equal);
    }

    #[test]
    fn storable_rejects_sentinel_and_pre_year_one() {
        assert!(Value::Date(0).check_storable().is_ok());
        assert!(Value::Date(MIN_DAY_COUNT).check_storable().is_ok());
        assert!(Value::Date(INVALID_DAY_COUNT).check_storable().is_err());
        assert!(Value::Date(MIN_DAY_COUNT - 1).check_storable().is_err());
        assert!(Value::Integer(INVALID_DAY_COUNT).check_storable().is_ok());
    }

    #[test]
    fn lenient_date_loader_keeps_bad_text() {
        assert_eq!(Value::try_date_from_text("2020-1-1"), Value::Date(18_262));
        assert_eq!(
            Value::try_date_from_text("2021-02-30"),
            Value::Text("2021-02-30".into())
        );
    }

    #[test]
    fn display_renders_dates() {
        assert_eq!(Value::date(2038, 1, 19).unwrap().to_string(), "2038-01-19");
        assert_eq!(Value::Date(INVALID_DAY_COUNT).to_string(), "");
        assert!(Value::Date(INVALID_DAY_COUNT).is_invalid_date());
    }

    #[test]
    fn total_order_across_kinds() {
        let mut values = vec![
            Value::from("b"),
            Value::Date(3),
            Value::from(2),
            Value::from(f32::NAN),
            Value::from(1.0f32),
            Value::from(1),
        ];
        values.sort_by(Value::total_cmp);
        assert_eq!(values[0], Value::from(1));
        assert_eq!(values[1], Value::from(2));
        assert_eq!(values[2], Value::from(1.0f32));
        assert!(matches!(values[3], Value::Float(f) if f.is_nan()));
        assert_eq!(values[4], Value::from("b"));
        assert_eq!(values[5], Value::Date(3));
    }
}
