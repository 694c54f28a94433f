// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::util::BitVec;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(values: Vec<bool>) -> Self {
		let bitvec = BitVec::repeat(true, values.len());
		Self {
			data: BitVec::from(values),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_parts(data: BitVec, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if index < self.len() && self.bitvec.get(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.bitvec.set(index, false);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn take(&self, num: usize) -> Self {
		let num = num.min(self.len());
		let mut result = Self::with_capacity(num);
		for i in 0..num {
			match self.get(i) {
				Some(v) => result.push(v),
				None => result.push_undefined(),
			}
		}
		result
	}
}
