// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::Type;

/// Static capabilities of a function, computed once when a resolver is built
/// and shared unchanged by every binding and executable derived from it.
///
/// The `default_for_*` switches tell the execution layer which column
/// preprocessing to apply before the function body runs; the remaining flags
/// feed optimizer decisions (common-subexpression elimination, plan-time
/// folding, caching).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionProperties {
	/// Propagate undefined argument rows into undefined result rows around
	/// the body. Off for functions with their own undefined semantics.
	pub default_for_undefined: bool,
	/// An argument column of the undefined type short-circuits execution
	/// into an all-undefined result.
	pub default_for_nothing: bool,
	/// All-constant arguments are unwrapped to one row, executed, and the
	/// result re-wrapped as a constant.
	pub default_for_constants: bool,
	/// Dictionary-encoded arguments are materialized before the body runs.
	pub default_for_dictionary: bool,
	/// Sparse arguments are materialized before the body runs.
	pub default_for_sparse: bool,
	/// A dynamically typed argument resolves the result type without
	/// consulting the function.
	pub default_for_dynamic: bool,
	/// The body may run over a dictionary's distinct values only, with the
	/// result re-indexed by the original mapping.
	pub executable_on_dictionary: bool,
	pub stateful: bool,
	pub deterministic: bool,
	pub deterministic_in_query: bool,
	pub server_constant: bool,
	pub suitable_for_constant_folding: bool,
	pub compilable: bool,
	pub has_monotonicity: bool,
	pub has_preimage: bool,
}

impl Default for FunctionProperties {
	fn default() -> Self {
		Self {
			default_for_undefined: true,
			default_for_nothing: true,
			default_for_constants: false,
			default_for_dictionary: true,
			default_for_sparse: true,
			default_for_dynamic: true,
			executable_on_dictionary: false,
			stateful: false,
			deterministic: true,
			deterministic_in_query: true,
			server_constant: false,
			suitable_for_constant_folding: true,
			compilable: false,
			has_monotonicity: false,
			has_preimage: false,
		}
	}
}

/// Argument type paired with whether the argument column is constant, the
/// shape short-circuit suitability is judged on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeConstInfo {
	pub ty: Type,
	pub is_constant: bool,
}

impl TypeConstInfo {
	pub fn new(ty: Type, is_constant: bool) -> Self {
		Self {
			ty,
			is_constant,
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let props = FunctionProperties::default();

		assert!(props.default_for_undefined);
		assert!(props.default_for_nothing);
		assert!(!props.default_for_constants);
		assert!(props.deterministic);
		assert!(props.suitable_for_constant_folding);
		assert!(!props.stateful);
		assert!(!props.compilable);
		assert!(!props.has_monotonicity);
	}
}
