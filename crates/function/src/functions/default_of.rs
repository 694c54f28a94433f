// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{Column, ColumnData};
use onyxdb_type::{IllegalArgumentError, Result, Type, Value};

use crate::{
	Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext, TypeConstInfo,
};

/// Returns the default value of the type named by its constant string
/// argument: 0 for numeric types, "" for text, false for booleans.
pub struct DefaultOf;

impl ScalarFunction for DefaultOf {
	fn name(&self) -> &str {
		"default_of"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(1)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_undefined: false,
			default_for_dictionary: false,
			..FunctionProperties::default()
		}
	}

	fn suitable_for_short_circuit(&self, _arguments: &[TypeConstInfo]) -> bool {
		false
	}

	fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
		// The result type is carried by the argument's value, not its type.
		Err(IllegalArgumentError::RequiresArgumentValues {
			function: self.name().to_string(),
		}
		.into())
	}

	fn return_type_for_columns(&self, arguments: &[Column]) -> Result<Type> {
		let argument = &arguments[0];
		if !argument.is_constant() || argument.get_type() != Type::Utf8 {
			return Err(IllegalArgumentError::ConstantStringRequired {
				function: self.name().to_string(),
				index: 0,
			}
			.into());
		}
		match argument.constant_value() {
			Some(Value::Utf8(name)) => Type::parse(&name),
			_ => Err(IllegalArgumentError::ConstantStringRequired {
				function: self.name().to_string(),
				index: 0,
			}
			.into()),
		}
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		Ok(ColumnData::constant(ctx.result_type.default_value(), ctx.row_count))
	}
}
