// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::ops::Deref;

use onyxdb_type::util::{BitVec, CowVec};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: CowVec<String>,
	bitvec: BitVec,
}

impl Deref for Utf8Container {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl Utf8Container {
	pub fn new(data: Vec<String>) -> Self {
		let bitvec = BitVec::repeat(true, data.len());
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

	pub fn from_parts(data: CowVec<String>, bitvec: BitVec) -> Self {
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

	pub fn get(&self, index: usize) -> Option<&str> {
		if index < self.len() && self.bitvec.get(index) {
			self.data.get(index).map(|s| s.as_str())
		} else {
			None
		}
	}

	pub fn data(&self) -> &[String] {
		self.data.as_slice()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all()
	}

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.bitvec.set(index, false);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn take(&self, num: usize) -> Self {
		let num = num.min(self.len());
		let mut result = Self::with_capacity(num);
		for i in 0..num {
			match self.get(i) {
				Some(v) => result.push(v.to_string()),
				None => result.push_undefined(),
			}
		}
		result
	}
}
