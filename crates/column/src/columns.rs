// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::ops::{Deref, Index};

use onyxdb_type::{Type, util::CowVec};
use serde::{Deserialize, Serialize};

use crate::column::Column;

/// A batch of equally long columns, the argument form every function
/// executes against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: CowVec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		self.columns.deref()
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.len());
		assert!(columns.iter().all(|c| c.len() == n));

		Self {
			columns: CowVec::new(columns),
		}
	}

	pub fn empty() -> Self {
		Self {
			columns: CowVec::new(Vec::new()),
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.len())
	}

	pub fn types(&self) -> Vec<Type> {
		self.columns.iter().map(|c| c.get_type()).collect()
	}
}

impl FromIterator<Column> for Columns {
	fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

#[cfg(test)]
pub mod tests {
	use crate::data::ColumnData;

	use super::*;

	#[test]
	fn test_new_and_access() {
		let columns = Columns::new(vec![
			Column::new("a", ColumnData::int4([1, 2])),
			Column::new("b", ColumnData::utf8(["x", "y"])),
		]);

		assert_eq!(columns.len(), 2);
		assert_eq!(columns.row_count(), 2);
		assert_eq!(columns[1].name(), "b");
		assert_eq!(columns.types(), vec![Type::Int4, Type::Utf8]);
	}

	#[test]
	#[should_panic]
	fn test_uneven_lengths_rejected() {
		Columns::new(vec![
			Column::new("a", ColumnData::int4([1, 2])),
			Column::new("b", ColumnData::int4([1])),
		]);
	}

	#[test]
	fn test_empty() {
		let columns = Columns::empty();
		assert_eq!(columns.row_count(), 0);
		assert!(columns.is_empty());
	}
}
