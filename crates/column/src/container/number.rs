// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::{
	fmt::{self, Debug},
	ops::Deref,
};

use onyxdb_type::{
	util::{BitVec, CowVec},
	value::is::IsNumber,
};
use serde::{Deserialize, Serialize};

pub struct NumberContainer<T>
where
	T: IsNumber,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T: IsNumber> Clone for NumberContainer<T> {
	fn clone(&self) -> Self {
		Self {
			data: self.data.clone(),
			bitvec: self.bitvec.clone(),
		}
	}
}

impl<T: IsNumber + Debug> Debug for NumberContainer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NumberContainer").field("data", &self.data).field("bitvec", &self.bitvec).finish()
	}
}

impl<T: IsNumber> PartialEq for NumberContainer<T> {
	fn eq(&self, other: &Self) -> bool {
		self.data == other.data && self.bitvec == other.bitvec
	}
}

impl<T: IsNumber + Serialize> Serialize for NumberContainer<T> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		#[derive(Serialize)]
		struct Helper<'a, T: Clone + Serialize> {
			data: &'a CowVec<T>,
			bitvec: &'a BitVec,
		}
		Helper {
			data: &self.data,
			bitvec: &self.bitvec,
		}
		.serialize(serializer)
	}
}

impl<'de, T: IsNumber + Deserialize<'de>> Deserialize<'de> for NumberContainer<T> {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		struct Helper<T: Clone> {
			data: CowVec<T>,
			bitvec: BitVec,
		}
		let h = Helper::deserialize(deserializer)?;
		Ok(NumberContainer {
			data: h.data,
			bitvec: h.bitvec,
		})
	}
}

impl<T: IsNumber> Deref for NumberContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl<T: IsNumber> NumberContainer<T> {
	pub fn new(data: Vec<T>) -> Self {
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

	pub fn from_parts(data: CowVec<T>, bitvec: BitVec) -> Self {
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

	pub fn get(&self, index: usize) -> Option<&T> {
		if index < self.len() && self.bitvec.get(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn data(&self) -> &[T] {
		self.data.as_slice()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.bitvec.set(index, false);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		(0..self.len()).map(|i| self.get(i).copied())
	}

	pub fn take(&self, num: usize) -> Self {
		let num = num.min(self.len());
		let mut result = Self::with_capacity(num);
		for i in 0..num {
			match self.get(i) {
				Some(v) => result.push(*v),
				None => result.push_undefined(),
			}
		}
		result
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_new_i32() {
		let container = NumberContainer::new(vec![1, 2, 3]);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(&1));
		assert_eq!(container.get(1), Some(&2));
		assert_eq!(container.get(2), Some(&3));
		assert!(container.is_fully_defined());
	}

	#[test]
	fn test_push_undefined() {
		let mut container: NumberContainer<i64> = NumberContainer::with_capacity(2);
		container.push(100);
		container.push_undefined();

		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some(&100));
		assert_eq!(container.get(1), None);
		assert!(container.is_defined(0));
		assert!(!container.is_defined(1));
	}

	#[test]
	fn test_set_undefined() {
		let mut container = NumberContainer::new(vec![1.0f64, 2.0]);
		container.set_undefined(1);

		assert_eq!(container.get(0), Some(&1.0));
		assert_eq!(container.get(1), None);
		// Payload is retained, only definedness changes.
		assert_eq!(container.data(), &[1.0, 2.0]);
	}

	#[test]
	fn test_iter() {
		let mut container = NumberContainer::new(vec![1u8, 2]);
		container.push_undefined();

		let collected: Vec<Option<u8>> = container.iter().collect();
		assert_eq!(collected, vec![Some(1), Some(2), None]);
	}

	#[test]
	fn test_take() {
		let container = NumberContainer::new(vec![10i16, 20, 30, 40]);
		let taken = container.take(2);

		assert_eq!(taken.len(), 2);
		assert_eq!(taken.get(0), Some(&10));
		assert_eq!(taken.get(1), Some(&20));
	}

	#[test]
	fn test_get_out_of_bounds() {
		let container = NumberContainer::new(vec![1i32]);
		assert_eq!(container.get(5), None);
	}
}
