//! The closed set of scalar kinds a [`Value`](crate::Value) can hold.

use std::fmt;
use std::str::FromStr;

use arrow::datatypes::DataType;
use datum_result::Error;

use crate::internal::{Bool, Codec, LeF32, LeI32};

/// Tag identifying which variant a [`Value`](crate::Value) holds and which
/// [`TypeStrategy`](crate::strategy::TypeStrategy) handles it.
///
/// The discriminants are stable and index the strategy registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    Integer = 0,
    Float = 1,
    Boolean = 2,
    Text = 3,
    Date = 4,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 5] = [
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::Text,
        Kind::Date,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Catalog name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Integer => "ints",
            Kind::Float => "floats",
            Kind::Boolean => "booleans",
            Kind::Text => "chars",
            Kind::Date => "dates",
        }
    }

    /// Payload width in bytes for inline kinds, `None` for TEXT.
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Kind::Integer | Kind::Date => Some(LeI32::WIDTH),
            Kind::Float => Some(LeF32::WIDTH),
            Kind::Boolean => Some(Bool::WIDTH),
            Kind::Text => None,
        }
    }

    /// Arrow type used for column slots of this kind.
    pub fn arrow_type(self) -> DataType {
        match self {
            Kind::Integer => DataType::Int32,
            Kind::Float => DataType::Float32,
            Kind::Boolean => DataType::Boolean,
            Kind::Text => DataType::Utf8,
            Kind::Date => DataType::Date32,
        }
    }

    /// Inverse of [`Kind::arrow_type`].
    pub fn from_arrow_type(data_type: &DataType) -> Option<Kind> {
        match data_type {
            DataType::Int32 => Some(Kind::Integer),
            DataType::Float32 => Some(Kind::Float),
            DataType::Boolean => Some(Kind::Boolean),
            DataType::Utf8 => Some(Kind::Text),
            DataType::Date32 => Some(Kind::Date),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgumentError(format!("unknown value kind '{s}'")))
    }
}
