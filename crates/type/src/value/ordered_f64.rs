// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::{
	cmp::Ordering,
	fmt::{self, Display},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// An 8-byte float that is never NaN, giving it a total order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn zero() -> Self {
		Self(0.0)
	}

	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = ();

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			Err(())
		} else {
			Ok(Self(value))
		}
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> f64 {
		value.0
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		// Invariant: never NaN.
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF64 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for OrderedF64 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f64::deserialize(deserializer)?;
		OrderedF64::try_from(value).map_err(|_| D::Error::custom("NaN is not an ordered float"))
	}
}
