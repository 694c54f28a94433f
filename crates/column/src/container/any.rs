// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::{
	Value,
	util::{BitVec, CowVec},
};
use serde::{Deserialize, Serialize};

/// Container for dynamically typed columns; each row carries its own type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnyContainer {
	data: CowVec<Value>,
	bitvec: BitVec,
}

impl AnyContainer {
	pub fn new(data: Vec<Value>) -> Self {
		let bitvec = data.iter().map(|v| !v.is_undefined()).collect();
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		if index < self.len() && self.bitvec.get(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn data(&self) -> &[Value] {
		self.data.as_slice()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all()
	}

	pub fn push(&mut self, value: Value) {
		let defined = !value.is_undefined();
		self.data.push(value);
		self.bitvec.push(defined);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(Value::Undefined);
		self.bitvec.push(false);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.bitvec.set(index, false);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn take(&self, num: usize) -> Self {
		let num = num.min(self.len());
		let mut result = Self::with_capacity(num);
		for i in 0..num {
			match self.get(i) {
				Some(v) => result.push(v.clone()),
				None => result.push_undefined(),
			}
		}
		result
	}
}
