// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{ColumnData, container::BoolContainer};
use onyxdb_type::{Result, Type};

use crate::{
	Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext, ShortCircuitSettings,
};

use super::{boolean_arguments, boolean_return_type, containers};

/// Variadic three-valued conjunction: false wins over undefined, undefined
/// wins over true. Declares every argument after the first lazily evaluable.
pub struct And;

impl ScalarFunction for And {
	fn name(&self) -> &str {
		"and"
	}

	fn arity(&self) -> Arity {
		Arity::Variadic {
			min: 2,
			max: None,
		}
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			// Undefined participates in the logic instead of erasing rows.
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
			let mut outcome = true;
			for argument in &arguments {
				match argument.get(row) {
					Some(false) => {
						outcome = false;
						break;
					}
					Some(true) => {}
					None => saw_undefined = true,
				}
			}
			if !outcome {
				result.push(false);
			} else if saw_undefined {
				result.push_undefined();
			} else {
				result.push(true);
			}
		}
		Ok(ColumnData::Bool(result))
	}
}

#[cfg(test)]
pub mod tests {
	use std::sync::Arc;

	use onyxdb_column::{Column, Columns};
	use onyxdb_type::Value;

	use crate::FunctionOverloadResolver;

	use super::*;

	fn bools(values: &[Option<bool>]) -> ColumnData {
		let mut data = ColumnData::bool([]);
		for value in values {
			match value {
				Some(v) => data.push_value(Value::Boolean(*v)),
				None => data.push_undefined(),
			}
		}
		data
	}

	fn execute(columns: Vec<Column>, row_count: usize) -> ColumnData {
		let resolver = FunctionOverloadResolver::new(Arc::new(And));
		let result_type = resolver.resolve_type_for_columns(&columns).unwrap();
		let base = resolver.bind(&columns, result_type).unwrap();
		let arguments = Columns::new(columns);
		base.prepare(&arguments).execute(&arguments, &result_type, row_count).unwrap()
	}

	#[test]
	fn test_three_valued_logic() {
		let result = execute(
			vec![
				Column::new("a", bools(&[Some(true), Some(false), Some(true), None])),
				Column::new("b", bools(&[Some(true), None, None, None])),
			],
			4,
		);

		assert_eq!(result.value(0), Value::Boolean(true));
		// false beats undefined
		assert_eq!(result.value(1), Value::Boolean(false));
		assert_eq!(result.value(2), Value::Undefined);
		assert_eq!(result.value(3), Value::Undefined);
	}

	#[test]
	fn test_variadic() {
		let result = execute(
			vec![
				Column::new("a", bools(&[Some(true)])),
				Column::new("b", bools(&[Some(true)])),
				Column::new("c", bools(&[Some(false)])),
			],
			1,
		);
		assert_eq!(result.value(0), Value::Boolean(false));
	}

	#[test]
	fn test_declares_short_circuit() {
		let settings = And.short_circuit(3).unwrap();
		assert_eq!(settings.lazy_positions, vec![1, 2]);
	}
}
