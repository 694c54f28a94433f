// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::Value;

use crate::data::{ColumnData, with_container};

impl ColumnData {
	pub fn push_undefined(&mut self) {
		with_container!(self, |c| c.push_undefined())
	}

	/// Append a value. The value's type must match the column's type;
	/// undefined values append an undefined row to any column.
	pub fn push_value(&mut self, value: Value) {
		if value.is_undefined() {
			self.push_undefined();
			return;
		}
		match (&mut *self, value) {
			(ColumnData::Bool(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Float4(c), Value::Float4(v)) => c.push(v.value()),
			(ColumnData::Float8(c), Value::Float8(v)) => c.push(v.value()),
			(ColumnData::Int1(c), Value::Int1(v)) => c.push(v),
			(ColumnData::Int2(c), Value::Int2(v)) => c.push(v),
			(ColumnData::Int4(c), Value::Int4(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Int16(c), Value::Int16(v)) => c.push(v),
			(ColumnData::Uint1(c), Value::Uint1(v)) => c.push(v),
			(ColumnData::Uint2(c), Value::Uint2(v)) => c.push(v),
			(ColumnData::Uint4(c), Value::Uint4(v)) => c.push(v),
			(ColumnData::Uint8(c), Value::Uint8(v)) => c.push(v),
			(ColumnData::Uint16(c), Value::Uint16(v)) => c.push(v),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(ColumnData::Any(c), value) => c.push(value),
			(data, value) => {
				panic!("push_value of {:?} into {:?} column", value.get_type(), data.get_type())
			}
		}
	}
}
