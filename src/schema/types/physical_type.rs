#[cfg(feature = "serde_types")]
use serde_derive::{Deserialize, Serialize};

use parquet_format_safe::Type;

use crate::error::Error;

/// The physical type of a Parquet column. The length of `FIXED_LEN_BYTE_ARRAY`
/// values is carried separately, as `type_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_types", derive(Deserialize, Serialize))]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl TryFrom<Type> for PhysicalType {
    type Error = Error;

    fn try_from(type_: Type) -> Result<Self, Self::Error> {
        Ok(match type_ {
            Type::BOOLEAN => PhysicalType::Boolean,
            Type::INT32 => PhysicalType::Int32,
            Type::INT64 => PhysicalType::Int64,
            Type::INT96 => PhysicalType::Int96,
            Type::FLOAT => PhysicalType::Float,
            Type::DOUBLE => PhysicalType::Double,
            Type::BYTE_ARRAY => PhysicalType::ByteArray,
            Type::FIXED_LEN_BYTE_ARRAY => PhysicalType::FixedLenByteArray,
            _ => return Err(Error::oos("Unknown type")),
        })
    }
}

impl From<PhysicalType> for Type {
    fn from(physical_type: PhysicalType) -> Self {
        match physical_type {
            PhysicalType::Boolean => Type::BOOLEAN,
            PhysicalType::Int32 => Type::INT32,
            PhysicalType::Int64 => Type::INT64,
            PhysicalType::Int96 => Type::INT96,
            PhysicalType::Float => Type::FLOAT,
            PhysicalType::Double => Type::DOUBLE,
            PhysicalType::ByteArray => Type::BYTE_ARRAY,
            PhysicalType::FixedLenByteArray => Type::FIXED_LEN_BYTE_ARRAY,
        }
    }
}

impl std::str::FromStr for PhysicalType {
    type Err = Error;

    /// Parses the names used by the parquet-format specification, e.g. `INT32`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "BOOLEAN" => PhysicalType::Boolean,
            "INT32" => PhysicalType::Int32,
            "INT64" => PhysicalType::Int64,
            "INT96" => PhysicalType::Int96,
            "FLOAT" => PhysicalType::Float,
            "DOUBLE" => PhysicalType::Double,
            "BYTE_ARRAY" => PhysicalType::ByteArray,
            "FIXED_LEN_BYTE_ARRAY" => PhysicalType::FixedLenByteArray,
            other => {
                return Err(Error::FeatureNotSupported(format!(
                    "unsupported type: {}",
                    other
                )))
            }
        })
    }
}
