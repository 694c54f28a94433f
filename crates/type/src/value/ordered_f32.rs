// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::{
	cmp::Ordering,
	fmt::{self, Display},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A 4-byte float that is never NaN, giving it a total order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn zero() -> Self {
		Self(0.0)
	}

	pub fn value(&self) -> f32 {
		self.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = ();

	fn try_from(value: f32) -> Result<Self, Self::Error> {
		if value.is_nan() {
			Err(())
		} else {
			Ok(Self(value))
		}
	}
}

impl From<OrderedF32> for f32 {
	fn from(value: OrderedF32) -> f32 {
		value.0
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		// Invariant: never NaN.
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF32 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for OrderedF32 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f32::deserialize(deserializer)?;
		OrderedF32::try_from(value).map_err(|_| D::Error::custom("NaN is not an ordered float"))
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF32::try_from(f32::NAN).is_err());
		assert!(OrderedF32::try_from(1.5).is_ok());
	}

	#[test]
	fn test_ordering() {
		let a = OrderedF32::try_from(-1.0).unwrap();
		let b = OrderedF32::try_from(2.5).unwrap();
		assert!(a < b);
		assert_eq!(a.cmp(&a), Ordering::Equal);
	}
}
