// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use serde::{Deserialize, Serialize};

/// Container for columns of the undefined type: a row count and nothing else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn is_defined(&self, _index: usize) -> bool {
		false
	}

	pub fn is_fully_defined(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn set_undefined(&mut self, _index: usize) {}

	pub fn take(&self, num: usize) -> Self {
		Self {
			len: num.min(self.len),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_len_only() {
		let mut container = UndefinedContainer::new(2);
		container.push_undefined();

		assert_eq!(container.len(), 3);
		assert_eq!(container.take(1).len(), 1);
	}
}
