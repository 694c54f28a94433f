// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::sync::Arc;

use onyxdb_column::{ColumnData, Columns};
use onyxdb_type::{Type, Value};

#[cfg(feature = "compile")]
use onyxdb_type::{IllegalArgumentError, Result};

use crate::{
	ExecutableFunction, FunctionProperties, Monotonicity, ScalarFunction, ShortCircuitSettings,
	TypeConstInfo, ValueInterval,
};

#[cfg(feature = "compile")]
use crate::compile::CompiledValue;

/// A definition fixed to concrete argument and result types. Immutable;
/// safely shared read-only across unlimited concurrent callers. One instance
/// per distinct (function, argument types, result type) combination — caching
/// across calls is the caller's responsibility.
#[derive(Clone)]
pub struct FunctionBase {
	function: Arc<dyn ScalarFunction>,
	properties: FunctionProperties,
	argument_types: Vec<Type>,
	result_type: Type,
}

impl FunctionBase {
	pub(crate) fn new(
		function: Arc<dyn ScalarFunction>,
		properties: FunctionProperties,
		argument_types: Vec<Type>,
		result_type: Type,
	) -> Self {
		Self {
			function,
			properties,
			argument_types,
			result_type,
		}
	}

	pub fn name(&self) -> &str {
		self.function.name()
	}

	pub fn argument_types(&self) -> &[Type] {
		&self.argument_types
	}

	pub fn result_type(&self) -> Type {
		self.result_type
	}

	pub fn properties(&self) -> FunctionProperties {
		self.properties
	}

	/// Produce an executable for one call site. Callable repeatedly and
	/// concurrently; every call yields an independent instance and never
	/// mutates the binding.
	pub fn prepare(&self, _arguments: &Columns) -> ExecutableFunction {
		ExecutableFunction::new(self.function.clone(), self.properties, self.argument_types.clone())
	}

	pub fn is_suitable_for_constant_folding(&self) -> bool {
		self.properties.suitable_for_constant_folding
	}

	/// A constant result that holds for any values of the given non-constant
	/// arguments, when the function can prove one.
	pub fn constant_result_for_nonconst_arguments(&self, arguments: &Columns) -> Option<ColumnData> {
		self.function.constant_result_for_nonconst_arguments(arguments, &self.result_type)
	}

	pub fn is_stateful(&self) -> bool {
		self.properties.stateful
	}

	pub fn is_deterministic(&self) -> bool {
		self.properties.deterministic
	}

	pub fn is_deterministic_in_query(&self) -> bool {
		self.properties.deterministic_in_query
	}

	pub fn is_server_constant(&self) -> bool {
		self.properties.server_constant
	}

	pub fn is_injective(&self, sample: &Columns) -> bool {
		self.function.is_injective(sample)
	}

	pub fn short_circuit(&self) -> Option<ShortCircuitSettings> {
		self.function.short_circuit(self.argument_types.len())
	}

	pub fn suitable_for_short_circuit(&self, arguments: &[TypeConstInfo]) -> bool {
		self.function.suitable_for_short_circuit(arguments)
	}

	pub fn has_monotonicity_info(&self) -> bool {
		self.properties.has_monotonicity
	}

	pub fn monotonicity_for_range(&self, ty: &Type, left: &Value, right: &Value) -> Monotonicity {
		self.function.monotonicity(ty, left, right)
	}

	pub fn has_preimage_info(&self) -> bool {
		self.properties.has_preimage
	}

	pub fn preimage(&self, ty: &Type, point: &Value) -> Option<ValueInterval> {
		self.function.preimage(ty, point)
	}

	pub fn can_execute_on_default_arguments(&self) -> bool {
		self.function.can_execute_on_default_arguments()
	}

	pub fn is_compilable(&self) -> bool {
		self.properties.compilable
	}

	/// Emit a symbolic value computing this binding over symbolic arguments.
	#[cfg(feature = "compile")]
	pub fn compile(&self, arguments: &[CompiledValue]) -> Result<CompiledValue> {
		if !self.properties.compilable {
			return Err(IllegalArgumentError::NotCompilable {
				function: self.name().to_string(),
			}
			.into());
		}
		self.function.compile(arguments, &self.result_type)
	}
}
