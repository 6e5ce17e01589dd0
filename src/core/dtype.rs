use std::fmt;

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};

/// Physical element representation of a widening vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    UInt8,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float64,
}

impl Repr {
    /// Inclusive integer range of the representation, `None` for floats.
    pub fn int_range(self) -> Option<(i128, i128)> {
        match self {
            Repr::UInt8 => Some((0, u8::MAX as i128)),
            Repr::UInt16 => Some((0, u16::MAX as i128)),
            Repr::UInt32 => Some((0, u32::MAX as i128)),
            Repr::UInt64 => Some((0, u64::MAX as i128)),
            Repr::Int8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Repr::Int16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Repr::Int32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Repr::Int64 => Some((i64::MIN as i128, i64::MAX as i128)),
            Repr::Float64 => None,
        }
    }

    /// True if every value of `other` can be stored in `self` without loss.
    ///
    /// Float64 sits at the top of the numeric chain and is treated as
    /// containing every integer representation.
    pub fn contains(self, other: Repr) -> bool {
        if self == other {
            return true;
        }
        match (self.int_range(), other.int_range()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some((lo, hi)), Some((olo, ohi))) => lo <= olo && ohi <= hi,
        }
    }

    /// Size of one element in bytes.
    pub fn width(self) -> usize {
        match self {
            Repr::UInt8 | Repr::Int8 => 1,
            Repr::UInt16 | Repr::Int16 => 2,
            Repr::UInt32 | Repr::Int32 => 4,
            Repr::UInt64 | Repr::Int64 | Repr::Float64 => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Repr::UInt8 => "uint8",
            Repr::Int8 => "int8",
            Repr::Int16 => "int16",
            Repr::Int32 => "int32",
            Repr::Int64 => "int64",
            Repr::UInt16 => "uint16",
            Repr::UInt32 => "uint32",
            Repr::UInt64 => "uint64",
            Repr::Float64 => "float64",
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type marker reported for a column chunk: either the current numeric
/// representation or the string marker for categorical data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TypeIndex {
    Numeric(Repr),
    Utf8,
}

impl From<Repr> for TypeIndex {
    fn from(repr: Repr) -> Self {
        TypeIndex::Numeric(repr)
    }
}

impl fmt::Display for TypeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIndex::Numeric(repr) => fmt::Display::fmt(repr, f),
            TypeIndex::Utf8 => f.write_str("utf8"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Semantics {
    Numeric,
    Stringish,
}

impl From<&Repr> for DataType {
    fn from(repr: &Repr) -> Self {
        match repr {
            Repr::UInt8 => DataType::UInt8,
            Repr::Int8 => DataType::Int8,
            Repr::Int16 => DataType::Int16,
            Repr::Int32 => DataType::Int32,
            Repr::Int64 => DataType::Int64,
            Repr::UInt16 => DataType::UInt16,
            Repr::UInt32 => DataType::UInt32,
            Repr::UInt64 => DataType::UInt64,
            Repr::Float64 => DataType::Float64,
        }
    }
}

impl From<&TypeIndex> for DataType {
    fn from(index: &TypeIndex) -> Self {
        match index {
            TypeIndex::Numeric(repr) => DataType::from(repr),
            TypeIndex::Utf8 => DataType::Utf8,
        }
    }
}
