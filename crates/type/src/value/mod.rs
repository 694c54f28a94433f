// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

pub mod is;
mod ordered_f32;
mod ordered_f64;
pub mod r#type;

pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use r#type::{GetType, Type};

/// A scalar value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
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
	/// A UTF-8 encoded text
	Utf8(String),
	/// A dynamically typed value
	Any(Box<Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn any(v: Value) -> Self {
		Value::Any(Box::new(v))
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
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
			Value::Any(_) => Type::Any,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
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
			Value::Utf8(v) => f.write_str(v),
			Value::Any(v) => Display::fmt(v, f),
		}
	}
}

impl PartialOrd for Value {
	/// Values of the same type order naturally; values of different types
	/// do not compare.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Undefined, Value::Undefined) => Some(Ordering::Equal),
			(Value::Boolean(a), Value::Boolean(b)) => a.partial_cmp(b),
			(Value::Float4(a), Value::Float4(b)) => a.partial_cmp(b),
			(Value::Float8(a), Value::Float8(b)) => a.partial_cmp(b),
			(Value::Int1(a), Value::Int1(b)) => a.partial_cmp(b),
			(Value::Int2(a), Value::Int2(b)) => a.partial_cmp(b),
			(Value::Int4(a), Value::Int4(b)) => a.partial_cmp(b),
			(Value::Int8(a), Value::Int8(b)) => a.partial_cmp(b),
			(Value::Int16(a), Value::Int16(b)) => a.partial_cmp(b),
			(Value::Uint1(a), Value::Uint1(b)) => a.partial_cmp(b),
			(Value::Uint2(a), Value::Uint2(b)) => a.partial_cmp(b),
			(Value::Uint4(a), Value::Uint4(b)) => a.partial_cmp(b),
			(Value::Uint8(a), Value::Uint8(b)) => a.partial_cmp(b),
			(Value::Uint16(a), Value::Uint16(b)) => a.partial_cmp(b),
			(Value::Utf8(a), Value::Utf8(b)) => a.partial_cmp(b),
			(Value::Any(a), Value::Any(b)) => a.partial_cmp(b),
			_ => None,
		}
	}
}
