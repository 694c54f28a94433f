// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

pub mod functions;
pub mod registry;

mod base;
mod executable;
mod monotonicity;
mod properties;
mod resolver;
mod short_circuit;

#[cfg(feature = "compile")]
pub mod compile;

pub use base::FunctionBase;
pub use executable::ExecutableFunction;
pub use monotonicity::{Monotonicity, ValueInterval};
pub use properties::{FunctionProperties, TypeConstInfo};
pub use resolver::FunctionOverloadResolver;
pub use short_circuit::ShortCircuitSettings;

use onyxdb_column::{Column, ColumnData, Columns};
use onyxdb_type::{Result, Type, Value};

#[cfg(feature = "compile")]
use crate::compile::CompiledValue;
#[cfg(feature = "compile")]
use onyxdb_type::IllegalArgumentError;

/// Argument shape of a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
	Exact(usize),
	Variadic { min: usize, max: Option<usize> },
}

impl Arity {
	pub fn is_variadic(&self) -> bool {
		matches!(self, Arity::Variadic { .. })
	}
}

pub struct ScalarFunctionContext<'a> {
	pub columns: &'a Columns,
	pub result_type: Type,
	pub row_count: usize,
}

/// A scalar function implementation: the stateless blueprint every resolver,
/// binding and executable derived from it shares by reference.
///
/// Implementations carry no per-call state. One instance serves unlimited
/// concurrent call sites.
pub trait ScalarFunction: Send + Sync {
	fn name(&self) -> &str;

	fn arity(&self) -> Arity;

	/// Static capabilities, queried once at resolver construction.
	fn properties(&self) -> FunctionProperties {
		FunctionProperties::default()
	}

	/// Argument positions that must be constant columns at resolution time.
	fn constant_positions(&self) -> Vec<usize> {
		Vec::new()
	}

	/// Argument positions whose undefined rows do not force the result row
	/// undefined under the default undefined handling.
	fn non_propagating_positions(&self, _argument_count: usize) -> Vec<usize> {
		Vec::new()
	}

	/// Result type from bare argument types.
	fn return_type(&self, argument_types: &[Type]) -> Result<Type>;

	/// Result type from full argument columns. Functions that only need the
	/// types inherit this; functions reading constant argument values
	/// override it.
	fn return_type_for_columns(&self, arguments: &[Column]) -> Result<Type> {
		let types: Vec<Type> = arguments.iter().map(|c| c.get_type()).collect();
		self.return_type(&types)
	}

	/// Rewrite candidate parameter types for a higher-order argument.
	fn lambda_argument_types(&self, _argument_types: &mut Vec<Type>) {}

	/// Lazy-evaluation policy, for control-flow-like functions only.
	fn short_circuit(&self, _argument_count: usize) -> Option<ShortCircuitSettings> {
		None
	}

	/// Whether this function's arguments are worth evaluating lazily when it
	/// appears under a short-circuit function.
	fn suitable_for_short_circuit(&self, _arguments: &[TypeConstInfo]) -> bool {
		true
	}

	fn is_injective(&self, _sample: &Columns) -> bool {
		false
	}

	/// Behavior over `[left, right]` of the argument type; meaningful only
	/// when the properties record has `has_monotonicity` set. An undefined
	/// endpoint is unbounded.
	fn monotonicity(&self, _ty: &Type, _left: &Value, _right: &Value) -> Monotonicity {
		Monotonicity::default()
	}

	/// The input interval producing `point`, when the function can invert
	/// it; meaningful only when the properties record has `has_preimage` set.
	fn preimage(&self, _ty: &Type, _point: &Value) -> Option<ValueInterval> {
		None
	}

	/// A constant result that holds regardless of the (non-constant)
	/// argument values, when one is statically known.
	fn constant_result_for_nonconst_arguments(
		&self,
		_arguments: &Columns,
		_result_type: &Type,
	) -> Option<ColumnData> {
		None
	}

	/// Whether substituting each type's default value for missing argument
	/// data yields a semantically valid result.
	fn can_execute_on_default_arguments(&self) -> bool {
		true
	}

	/// Result type used when a dynamically typed argument is resolved under
	/// the default dynamic handling. `None` keeps the dynamic type.
	fn dynamic_return_type(&self) -> Option<Type> {
		None
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData>;

	/// Same resolution as [`ScalarFunction::scalar`] without the obligation
	/// to materialize meaningful values. Functions whose execution is
	/// expensive or side-effecting override this with a cheap shape-only
	/// result.
	fn scalar_dry_run(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		self.scalar(ctx)
	}

	/// Emit a symbolic value computing this function over symbolic
	/// arguments. Reachable only through a binding whose properties record
	/// has `compilable` set.
	#[cfg(feature = "compile")]
	fn compile(&self, _arguments: &[CompiledValue], _result_type: &Type) -> Result<CompiledValue> {
		Err(IllegalArgumentError::NotCompilable {
			function: self.name().to_string(),
		}
		.into())
	}
}
