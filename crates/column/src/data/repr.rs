// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::{Value, util::CowVec};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data::ColumnData;

/// A single value repeated for `row_count` rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantContainer {
	value: Box<ColumnData>,
	row_count: usize,
}

impl ConstantContainer {
	pub fn new(value: ColumnData, row_count: usize) -> Self {
		debug_assert_eq!(value.len(), 1);
		Self {
			value: Box::new(value),
			row_count,
		}
	}

	pub fn value(&self) -> &ColumnData {
		&self.value
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn take(&self, num: usize) -> Self {
		Self {
			value: self.value.clone(),
			row_count: num.min(self.row_count),
		}
	}
}

/// Low-cardinality representation: per-row indices into a small values column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryContainer {
	indices: CowVec<u32>,
	values: Box<ColumnData>,
}

impl DictionaryContainer {
	pub fn new(indices: Vec<u32>, values: ColumnData) -> Self {
		debug_assert!(indices.iter().all(|i| (*i as usize) < values.len()));
		Self {
			indices: CowVec::new(indices),
			values: Box::new(values),
		}
	}

	pub fn indices(&self) -> &[u32] {
		self.indices.as_slice()
	}

	pub fn values(&self) -> &ColumnData {
		&self.values
	}

	pub fn value(&self, index: usize) -> Value {
		match self.indices.get(index) {
			Some(i) => self.values.value(*i as usize),
			None => Value::Undefined,
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self.indices.get(index) {
			Some(i) => self.values.is_defined(*i as usize),
			None => false,
		}
	}

	/// Rebuild with a transformed values column, keeping the row mapping.
	pub fn with_values(&self, values: ColumnData) -> Self {
		debug_assert_eq!(values.len(), self.values.len());
		Self {
			indices: self.indices.clone(),
			values: Box::new(values),
		}
	}
}

/// Mostly-default representation: explicit values for a few offsets, the
/// type's default value everywhere else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparseContainer {
	row_count: usize,
	offsets: CowVec<u32>,
	values: Box<ColumnData>,
}

impl SparseContainer {
	pub fn new(row_count: usize, offsets: Vec<u32>, values: ColumnData) -> Self {
		debug_assert_eq!(offsets.len(), values.len());
		debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
		debug_assert!(offsets.iter().all(|o| (*o as usize) < row_count));
		Self {
			row_count,
			offsets: CowVec::new(offsets),
			values: Box::new(values),
		}
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn offsets(&self) -> &[u32] {
		self.offsets.as_slice()
	}

	pub fn values(&self) -> &ColumnData {
		&self.values
	}

	pub fn value(&self, index: usize) -> Value {
		match self.offsets.as_slice().binary_search(&(index as u32)) {
			Ok(pos) => self.values.value(pos),
			Err(_) => self.values.get_type().default_value(),
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self.offsets.as_slice().binary_search(&(index as u32)) {
			Ok(pos) => self.values.is_defined(pos),
			Err(_) => index < self.row_count,
		}
	}
}

impl ColumnData {
	/// Constant column of `row_count` rows — every row holds `value`.
	pub fn constant(value: Value, row_count: usize) -> Self {
		ColumnData::Constant(ConstantContainer::new(ColumnData::from_single(value), row_count))
	}

	pub fn dictionary(indices: Vec<u32>, values: ColumnData) -> Self {
		ColumnData::Dictionary(DictionaryContainer::new(indices, values))
	}

	pub fn sparse(row_count: usize, offsets: Vec<u32>, values: ColumnData) -> Self {
		ColumnData::Sparse(SparseContainer::new(row_count, offsets, values))
	}

	/// Re-wrap an already materialized single-row column as a constant.
	pub fn into_constant(self, row_count: usize) -> Self {
		match self {
			ColumnData::Constant(c) => ColumnData::Constant(ConstantContainer::new(
				c.value().clone(),
				row_count,
			)),
			other => ColumnData::Constant(ConstantContainer::new(other, row_count)),
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, ColumnData::Constant(_))
	}

	/// The repeated value of a constant column.
	pub fn constant_value(&self) -> Option<Value> {
		match self {
			ColumnData::Constant(c) => Some(c.value().value(0)),
			_ => None,
		}
	}

	/// Expand a compact representation into its plain container form. Plain
	/// columns clone cheaply (the containers share their allocations).
	pub fn materialized(&self) -> ColumnData {
		match self {
			ColumnData::Constant(c) => {
				trace!(rows = c.row_count(), "materializing constant column");
				let mut result =
					ColumnData::with_capacity(c.value().get_type(), c.row_count());
				let value = c.value().value(0);
				for _ in 0..c.row_count() {
					result.push_value(value.clone());
				}
				result
			}
			ColumnData::Dictionary(d) => {
				trace!(rows = d.indices().len(), "materializing dictionary column");
				let mut result =
					ColumnData::with_capacity(d.values().get_type(), d.indices().len());
				for index in 0..d.indices().len() {
					result.push_value(d.value(index));
				}
				result
			}
			ColumnData::Sparse(s) => {
				trace!(rows = s.row_count(), "materializing sparse column");
				let mut result =
					ColumnData::with_capacity(s.values().get_type(), s.row_count());
				for index in 0..s.row_count() {
					result.push_value(s.value(index));
				}
				result
			}
			other => other.clone(),
		}
	}
}
