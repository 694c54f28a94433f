// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::{collections::HashMap, sync::Arc};

use onyxdb_type::{Result, TypeError};
use tracing::debug;

use crate::{
	FunctionOverloadResolver, ScalarFunction,
	functions::{
		DefaultOf, Ignore, Random,
		logical::{And, Or},
		math::{Clamp, Negate, Plus},
		text::{Lower, Upper},
	},
};

/// Maps function names to their shared definitions. Registration happens up
/// front; afterwards the registry is read-only and safely shared.
pub struct Functions {
	scalars: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl Functions {
	pub fn new() -> Self {
		Self {
			scalars: HashMap::new(),
		}
	}

	/// A registry pre-populated with the built-in functions.
	pub fn standard() -> Self {
		let mut functions = Self::new();
		functions.register(And);
		functions.register(Clamp);
		functions.register(DefaultOf);
		functions.register(Ignore);
		functions.register(Lower);
		functions.register(Negate);
		functions.register(Or);
		functions.register(Plus);
		functions.register(Random);
		functions.register(Upper);
		functions
	}

	pub fn register<F: ScalarFunction + 'static>(&mut self, function: F) {
		self.scalars.insert(function.name().to_string(), Arc::new(function));
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn ScalarFunction>> {
		self.scalars.get(name).cloned()
	}

	/// Resolver for the named function, the entry point of the protocol.
	pub fn resolver(&self, name: &str) -> Result<FunctionOverloadResolver> {
		debug!(function = name, "looking up scalar function");
		self.get(name).map(FunctionOverloadResolver::new).ok_or_else(|| {
			TypeError::UnknownFunction {
				name: name.to_string(),
			}
			.into()
		})
	}
}

impl Default for Functions {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_lookup() {
		let functions = Functions::standard();
		assert_eq!(functions.resolver("plus").unwrap().name(), "plus");
		assert_eq!(functions.resolver("default_of").unwrap().name(), "default_of");
	}

	#[test]
	fn test_unknown_function() {
		let functions = Functions::standard();
		let err = functions.resolver("no_such_function").unwrap_err();
		assert_eq!(
			err,
			TypeError::UnknownFunction {
				name: "no_such_function".to_string()
			}
			.into()
		);
	}

	#[test]
	fn test_registration_replaces_by_name() {
		let mut functions = Functions::new();
		functions.register(Plus);
		functions.register(Plus);
		assert!(functions.get("plus").is_some());
	}

	#[test]
	fn test_definitions_are_shared() {
		let functions = Functions::standard();
		let first = functions.get("plus").unwrap();
		let second = functions.get("plus").unwrap();
		assert!(Arc::ptr_eq(&first, &second));
	}
}
