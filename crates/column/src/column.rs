// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::data::ColumnData;

/// A named column of typed data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn is_constant(&self) -> bool {
		self.data.is_constant()
	}

	pub fn constant_value(&self) -> Option<Value> {
		self.data.constant_value()
	}

	/// The same column with any compact representation expanded.
	pub fn materialized(&self) -> Column {
		Column {
			name: self.name.clone(),
			data: self.data.materialized(),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_accessors() {
		let column = Column::new("x", ColumnData::int4([1, 2]));

		assert_eq!(column.name(), "x");
		assert_eq!(column.get_type(), Type::Int4);
		assert_eq!(column.len(), 2);
		assert!(!column.is_constant());
	}

	#[test]
	fn test_constant_column() {
		let column = Column::new("c", ColumnData::constant(Value::bool(true), 4));

		assert!(column.is_constant());
		assert_eq!(column.constant_value(), Some(Value::Boolean(true)));
		assert_eq!(column.materialized().data, ColumnData::bool([true, true, true, true]));
	}
}
