// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

mod push;
mod repr;

use onyxdb_type::{Type, Value, util::BitVec};
use serde::{Deserialize, Serialize};

pub use repr::{ConstantContainer, DictionaryContainer, SparseContainer};

use crate::container::{AnyContainer, BoolContainer, NumberContainer, UndefinedContainer, Utf8Container};

/// Typed column payload. Plain variants hold one container per scalar type;
/// the `Constant`, `Dictionary` and `Sparse` variants are compact
/// representations that expand to a plain variant via [`ColumnData::materialized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(Utf8Container),
	Any(AnyContainer),
	Undefined(UndefinedContainer),
	Constant(ConstantContainer),
	Dictionary(DictionaryContainer),
	Sparse(SparseContainer),
}

/// Dispatch over every plain container variant. The compact representations
/// do not share the container API and must be handled by the caller first.
macro_rules! with_container {
	($self:expr, |$c:ident| $body:expr) => {
		match $self {
			ColumnData::Bool($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Int16($c) => $body,
			ColumnData::Uint1($c) => $body,
			ColumnData::Uint2($c) => $body,
			ColumnData::Uint4($c) => $body,
			ColumnData::Uint8($c) => $body,
			ColumnData::Uint16($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Any($c) => $body,
			ColumnData::Undefined($c) => $body,
			other => panic!("container access on {:?} representation", other.get_type()),
		}
	};
}

pub(crate) use with_container;

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::new(values.into_iter().collect()))
	}

	pub fn float4(values: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int1(values: impl IntoIterator<Item = i8>) -> Self {
		ColumnData::Int1(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int2(values: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn int16(values: impl IntoIterator<Item = i128>) -> Self {
		ColumnData::Int16(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn uint1(values: impl IntoIterator<Item = u8>) -> Self {
		ColumnData::Uint1(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn uint2(values: impl IntoIterator<Item = u16>) -> Self {
		ColumnData::Uint2(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn uint4(values: impl IntoIterator<Item = u32>) -> Self {
		ColumnData::Uint4(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn uint8(values: impl IntoIterator<Item = u64>) -> Self {
		ColumnData::Uint8(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn uint16(values: impl IntoIterator<Item = u128>) -> Self {
		ColumnData::Uint16(NumberContainer::new(values.into_iter().collect()))
	}

	pub fn utf8<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		ColumnData::Utf8(Utf8Container::new(values.into_iter().map(Into::into).collect()))
	}

	pub fn any(values: impl IntoIterator<Item = Value>) -> Self {
		ColumnData::Any(AnyContainer::new(values.into_iter().collect()))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// An empty column of the given type, ready to be pushed into.
	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Any => ColumnData::Any(AnyContainer::with_capacity(capacity)),
		}
	}

	/// A single-row column holding the given value.
	pub fn from_single(value: Value) -> Self {
		match value {
			Value::Undefined => ColumnData::undefined(1),
			Value::Boolean(v) => ColumnData::bool([v]),
			Value::Float4(v) => ColumnData::float4([v.value()]),
			Value::Float8(v) => ColumnData::float8([v.value()]),
			Value::Int1(v) => ColumnData::int1([v]),
			Value::Int2(v) => ColumnData::int2([v]),
			Value::Int4(v) => ColumnData::int4([v]),
			Value::Int8(v) => ColumnData::int8([v]),
			Value::Int16(v) => ColumnData::int16([v]),
			Value::Uint1(v) => ColumnData::uint1([v]),
			Value::Uint2(v) => ColumnData::uint2([v]),
			Value::Uint4(v) => ColumnData::uint4([v]),
			Value::Uint8(v) => ColumnData::uint8([v]),
			Value::Uint16(v) => ColumnData::uint16([v]),
			Value::Utf8(v) => ColumnData::utf8([v]),
			Value::Any(v) => ColumnData::any([*v]),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Any(_) => Type::Any,
			ColumnData::Undefined(_) => Type::Undefined,
			ColumnData::Constant(c) => c.value().get_type(),
			ColumnData::Dictionary(d) => d.values().get_type(),
			ColumnData::Sparse(s) => s.values().get_type(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Constant(c) => c.row_count(),
			ColumnData::Dictionary(d) => d.indices().len(),
			ColumnData::Sparse(s) => s.row_count(),
			other => with_container!(other, |c| c.len()),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The value at `index`, `Value::Undefined` where undefined.
	pub fn value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(c) => c.get(index).map(Value::Boolean).unwrap_or(Value::Undefined),
			ColumnData::Float4(c) => c.get(index).map(|v| Value::float4(*v)).unwrap_or(Value::Undefined),
			ColumnData::Float8(c) => c.get(index).map(|v| Value::float8(*v)).unwrap_or(Value::Undefined),
			ColumnData::Int1(c) => c.get(index).map(|v| Value::Int1(*v)).unwrap_or(Value::Undefined),
			ColumnData::Int2(c) => c.get(index).map(|v| Value::Int2(*v)).unwrap_or(Value::Undefined),
			ColumnData::Int4(c) => c.get(index).map(|v| Value::Int4(*v)).unwrap_or(Value::Undefined),
			ColumnData::Int8(c) => c.get(index).map(|v| Value::Int8(*v)).unwrap_or(Value::Undefined),
			ColumnData::Int16(c) => c.get(index).map(|v| Value::Int16(*v)).unwrap_or(Value::Undefined),
			ColumnData::Uint1(c) => c.get(index).map(|v| Value::Uint1(*v)).unwrap_or(Value::Undefined),
			ColumnData::Uint2(c) => c.get(index).map(|v| Value::Uint2(*v)).unwrap_or(Value::Undefined),
			ColumnData::Uint4(c) => c.get(index).map(|v| Value::Uint4(*v)).unwrap_or(Value::Undefined),
			ColumnData::Uint8(c) => c.get(index).map(|v| Value::Uint8(*v)).unwrap_or(Value::Undefined),
			ColumnData::Uint16(c) => {
				c.get(index).map(|v| Value::Uint16(*v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Utf8(c) => c.get(index).map(Value::utf8).unwrap_or(Value::Undefined),
			ColumnData::Any(c) => c.get(index).cloned().unwrap_or(Value::Undefined),
			ColumnData::Undefined(_) => Value::Undefined,
			ColumnData::Constant(c) => c.value().value(0),
			ColumnData::Dictionary(d) => d.value(index),
			ColumnData::Sparse(s) => s.value(index),
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Undefined(_) => false,
			ColumnData::Constant(c) => c.value().is_defined(0),
			ColumnData::Dictionary(d) => d.is_defined(index),
			ColumnData::Sparse(s) => s.is_defined(index),
			other => with_container!(other, |c| c.is_defined(index)),
		}
	}

	pub fn is_fully_defined(&self) -> bool {
		match self {
			ColumnData::Undefined(c) => c.is_empty(),
			ColumnData::Constant(c) => c.row_count() == 0 || c.value().is_defined(0),
			ColumnData::Dictionary(_) | ColumnData::Sparse(_) => {
				(0..self.len()).all(|i| self.is_defined(i))
			}
			other => with_container!(other, |c| c.is_fully_defined()),
		}
	}

	/// Bitmap with a set bit for every undefined row.
	pub fn undefined_mask(&self) -> BitVec {
		(0..self.len()).map(|i| !self.is_defined(i)).collect()
	}

	/// Mark every row with a set bit in `mask` as undefined. A compact
	/// representation is materialized first.
	pub fn undefine_where(&mut self, mask: &BitVec) {
		debug_assert_eq!(mask.len(), self.len());
		if !mask.any() {
			return;
		}
		if matches!(self, ColumnData::Constant(_) | ColumnData::Dictionary(_) | ColumnData::Sparse(_)) {
			*self = self.materialized();
		}
		for index in 0..mask.len() {
			if mask.get(index) {
				with_container!(&mut *self, |c| c.set_undefined(index));
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|i| self.value(i))
	}

	pub fn take(&self, num: usize) -> Self {
		match self {
			ColumnData::Constant(c) => ColumnData::Constant(c.take(num)),
			ColumnData::Dictionary(_) | ColumnData::Sparse(_) => self.materialized().take(num),
			ColumnData::Bool(c) => ColumnData::Bool(c.take(num)),
			ColumnData::Float4(c) => ColumnData::Float4(c.take(num)),
			ColumnData::Float8(c) => ColumnData::Float8(c.take(num)),
			ColumnData::Int1(c) => ColumnData::Int1(c.take(num)),
			ColumnData::Int2(c) => ColumnData::Int2(c.take(num)),
			ColumnData::Int4(c) => ColumnData::Int4(c.take(num)),
			ColumnData::Int8(c) => ColumnData::Int8(c.take(num)),
			ColumnData::Int16(c) => ColumnData::Int16(c.take(num)),
			ColumnData::Uint1(c) => ColumnData::Uint1(c.take(num)),
			ColumnData::Uint2(c) => ColumnData::Uint2(c.take(num)),
			ColumnData::Uint4(c) => ColumnData::Uint4(c.take(num)),
			ColumnData::Uint8(c) => ColumnData::Uint8(c.take(num)),
			ColumnData::Uint16(c) => ColumnData::Uint16(c.take(num)),
			ColumnData::Utf8(c) => ColumnData::Utf8(c.take(num)),
			ColumnData::Any(c) => ColumnData::Any(c.take(num)),
			ColumnData::Undefined(c) => ColumnData::Undefined(c.take(num)),
		}
	}
}
