// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::sync::Arc;

use onyxdb_column::{Column, Columns};
use onyxdb_type::{Result, Type, TypeError};
use tracing::debug;

use crate::{
	Arity, FunctionBase, FunctionProperties, ScalarFunction, ShortCircuitSettings, TypeConstInfo,
};

/// Entry point of the resolution protocol: turns argument types or columns
/// into a result type and produces bindings. Holds the shared definition
/// handle; every static property is answerable here without paying binding
/// cost, so candidate overloads can be pruned cheaply.
#[derive(Clone)]
pub struct FunctionOverloadResolver {
	function: Arc<dyn ScalarFunction>,
	properties: FunctionProperties,
}

impl std::fmt::Debug for FunctionOverloadResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionOverloadResolver")
			.field("function", &self.function.name())
			.field("properties", &self.properties)
			.finish()
	}
}

impl FunctionOverloadResolver {
	pub fn new(function: Arc<dyn ScalarFunction>) -> Self {
		let properties = function.properties();
		Self {
			function,
			properties,
		}
	}

	pub fn name(&self) -> &str {
		self.function.name()
	}

	pub fn arity(&self) -> Arity {
		self.function.arity()
	}

	pub fn is_variadic(&self) -> bool {
		self.function.arity().is_variadic()
	}

	pub fn properties(&self) -> FunctionProperties {
		self.properties
	}

	pub fn is_deterministic(&self) -> bool {
		self.properties.deterministic
	}

	pub fn is_deterministic_in_query(&self) -> bool {
		self.properties.deterministic_in_query
	}

	pub fn is_stateful(&self) -> bool {
		self.properties.stateful
	}

	pub fn is_server_constant(&self) -> bool {
		self.properties.server_constant
	}

	pub fn is_injective(&self, sample: &Columns) -> bool {
		self.function.is_injective(sample)
	}

	pub fn constant_positions(&self) -> Vec<usize> {
		self.function.constant_positions()
	}

	pub fn non_propagating_positions(&self, argument_count: usize) -> Vec<usize> {
		self.function.non_propagating_positions(argument_count)
	}

	pub fn short_circuit(&self, argument_count: usize) -> Option<ShortCircuitSettings> {
		self.function.short_circuit(argument_count)
	}

	pub fn suitable_for_short_circuit(&self, arguments: &[TypeConstInfo]) -> bool {
		self.function.suitable_for_short_circuit(arguments)
	}

	pub fn can_execute_on_dictionary(&self) -> bool {
		self.properties.executable_on_dictionary
	}

	pub fn use_default_for_dynamic(&self) -> bool {
		self.properties.default_for_dynamic
	}

	pub fn dynamic_return_type(&self) -> Option<Type> {
		self.function.dynamic_return_type()
	}

	/// Rewrite candidate parameter types in place for a function taking a
	/// higher-order argument.
	pub fn lambda_argument_types(&self, argument_types: &mut Vec<Type>) {
		self.function.lambda_argument_types(argument_types);
	}

	/// Resolve the result type from bare argument types.
	pub fn resolve_type(&self, argument_types: &[Type]) -> Result<Type> {
		self.check_arity(argument_types.len())?;
		if let Some(resolved) = self.resolve_special(argument_types) {
			return Ok(resolved);
		}
		let resolved = self.function.return_type(argument_types)?;
		debug!(function = self.name(), result = %resolved, "resolved return type");
		Ok(resolved)
	}

	/// Resolve the result type from full argument columns, enforcing
	/// required-constant positions.
	pub fn resolve_type_for_columns(&self, arguments: &[Column]) -> Result<Type> {
		self.check_arity(arguments.len())?;
		for index in self.function.constant_positions() {
			if index < arguments.len() && !arguments[index].is_constant() {
				return Err(TypeError::RequiredConstantArgument {
					function: self.name().to_string(),
					index,
				}
				.into());
			}
		}
		let types: Vec<Type> = arguments.iter().map(|c| c.get_type()).collect();
		if let Some(resolved) = self.resolve_special(&types) {
			return Ok(resolved);
		}
		let resolved = self.function.return_type_for_columns(arguments)?;
		debug!(function = self.name(), result = %resolved, "resolved return type");
		Ok(resolved)
	}

	/// Fix the definition to the argument columns' types and the resolved
	/// result type.
	pub fn bind(&self, arguments: &[Column], result_type: Type) -> Result<FunctionBase> {
		self.check_arity(arguments.len())?;
		let argument_types: Vec<Type> = arguments.iter().map(|c| c.get_type()).collect();
		Ok(FunctionBase::new(self.function.clone(), self.properties, argument_types, result_type))
	}

	fn resolve_special(&self, argument_types: &[Type]) -> Option<Type> {
		if self.properties.default_for_dynamic && argument_types.contains(&Type::Any) {
			return Some(self.function.dynamic_return_type().unwrap_or(Type::Any));
		}
		if self.properties.default_for_nothing && argument_types.contains(&Type::Undefined) {
			return Some(Type::Undefined);
		}
		None
	}

	fn check_arity(&self, actual: usize) -> Result<()> {
		match self.function.arity() {
			Arity::Exact(expected) => {
				if actual != expected {
					return Err(TypeError::ArityMismatch {
						function: self.name().to_string(),
						expected,
						actual,
					}
					.into());
				}
			}
			Arity::Variadic {
				min,
				max,
			} => {
				if actual < min {
					return Err(TypeError::ArityMismatch {
						function: self.name().to_string(),
						expected: min,
						actual,
					}
					.into());
				}
				if let Some(max) = max {
					if actual > max {
						return Err(TypeError::TooManyArguments {
							function: self.name().to_string(),
							max,
							actual,
						}
						.into());
					}
				}
			}
		}
		Ok(())
	}
}
