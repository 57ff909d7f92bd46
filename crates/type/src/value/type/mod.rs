// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, value::Value};

/// All column types a transform schema can declare
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text.
	Utf8,
	/// A binary large object
	Blob,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Blob => f.write_str("Blob"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

impl From<&Value> for Type {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
		}
	}
}

impl FromStr for Type {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_uppercase().as_str() {
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"FLOAT4" | "FLOAT" | "REAL" => Ok(Type::Float4),
			"FLOAT8" | "DOUBLE" => Ok(Type::Float8),
			"INT1" | "BYTE" | "TINYINT" => Ok(Type::Int1),
			"INT2" | "SHORT" | "SMALLINT" => Ok(Type::Int2),
			"INT4" | "INT" | "INTEGER" => Ok(Type::Int4),
			"INT8" | "LONG" | "BIGINT" => Ok(Type::Int8),
			"INT16" => Ok(Type::Int16),
			"UINT1" => Ok(Type::Uint1),
			"UINT2" => Ok(Type::Uint2),
			"UINT4" => Ok(Type::Uint4),
			"UINT8" => Ok(Type::Uint8),
			"UINT16" => Ok(Type::Uint16),
			"UTF8" | "TEXT" | "STR" | "STRING" => Ok(Type::Utf8),
			"BLOB" | "BYTES" | "BINARY" => Ok(Type::Blob),
			"UNDEFINED" | "NULL" => Ok(Type::Undefined),
			_ => Err(Error::UnknownType {
				name: s.trim().to_string(),
			}),
		}
	}
}
