// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod r#type;

pub use r#type::Type;

/// A single cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A binary large object
	Blob(Vec<u8>),
}

impl Value {
	pub fn get_type(&self) -> Type {
		Type::from(self)
	}

	/// Widens any integer value to `i128`.
	pub fn as_i128(&self) -> Option<i128> {
		match self {
			Value::Int1(v) => Some(*v as i128),
			Value::Int2(v) => Some(*v as i128),
			Value::Int4(v) => Some(*v as i128),
			Value::Int8(v) => Some(*v as i128),
			Value::Int16(v) => Some(*v),
			Value::Uint1(v) => Some(*v as i128),
			Value::Uint2(v) => Some(*v as i128),
			Value::Uint4(v) => Some(*v as i128),
			Value::Uint8(v) => Some(*v as i128),
			Value::Uint16(v) => i128::try_from(*v).ok(),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Int16(v) => Display::fmt(v, f),
			Value::Uint1(v) => Display::fmt(v, f),
			Value::Uint2(v) => Display::fmt(v, f),
			Value::Uint4(v) => Display::fmt(v, f),
			Value::Uint8(v) => Display::fmt(v, f),
			Value::Uint16(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
			Value::Blob(v) => {
				f.write_str("0x")?;
				for byte in v {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
		}
	}
}

macro_rules! impl_from_native {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$variant(v)
				}
			}
		)*
	};
}

impl_from_native! {
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
	Vec<u8> => Blob,
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::Undefined,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_value_type() {
		assert_eq!(Value::from(1i32).get_type(), Type::Int4);
		assert_eq!(Value::from("a").get_type(), Type::Utf8);
		assert_eq!(Value::from(None::<i64>).get_type(), Type::Undefined);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Int4(7).to_string(), "7");
		assert_eq!(Value::Blob(vec![0xde, 0xad]).to_string(), "0xdead");
		assert_eq!(Value::Undefined.to_string(), "undefined");
	}

	#[test]
	fn test_as_i128() {
		assert_eq!(Value::Uint2(3).as_i128(), Some(3));
		assert_eq!(Value::Utf8("3".into()).as_i128(), None);
	}
}
