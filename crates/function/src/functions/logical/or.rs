// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{ColumnData, container::BoolContainer};
use onyxdb_type::{Result, Type};

use crate::{
	Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext, ShortCircuitSettings,
};

use super::{boolean_arguments, boolean_return_type, containers};

/// Variadic three-valued disjunction: true wins over undefined, undefined
/// wins over false. Declares every argument after the first lazily evaluable.
pub struct Or;

impl ScalarFunction for Or {
	fn name(&self) -> &str {
		"or"
	}

	fn arity(&self) -> Arity {
		Arity::Variadic {
			min: 2,
			max: None,
		}
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_undefined: false,
			..FunctionProperties::default()
		}
	}

	fn short_circuit(&self, argument_count: usize) -> Option<ShortCircuitSettings> {
		Some(ShortCircuitSettings::all_but_first(argument_count))
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		boolean_return_type(self.name(), argument_types)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		let arguments = boolean_arguments(self.name(), &ctx)?;
		let arguments = containers(&arguments);

		let mut result = BoolContainer::with_capacity(ctx.row_count);
		for row in 0..ctx.row_count {
			let mut saw_undefined = false;
			let mut outcome = false;
			for argument in &arguments {
				match argument.get(row) {
					Some(true) => {
						outcome = true;
						break;
					}
					Some(false) => {}
					None => saw_undefined = true,
				}
			}
			if outcome {
				result.push(true);
			} else if saw_undefined {
				result.push_undefined();
			} else {
				result.push(false);
			}
		}
		Ok(ColumnData::Bool(result))
	}
}
