// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

mod and;
mod or;

pub use and::And;
pub use or::Or;

use onyxdb_column::{ColumnData, container::BoolContainer};
use onyxdb_type::{Result, Type, TypeError};

use crate::ScalarFunctionContext;

pub(crate) fn boolean_return_type(function: &str, argument_types: &[Type]) -> Result<Type> {
	for (index, argument) in argument_types.iter().enumerate() {
		if *argument != Type::Boolean {
			return Err(TypeError::InvalidArgumentType {
				function: function.to_string(),
				index,
				expected: vec![Type::Boolean],
				actual: *argument,
			}
			.into());
		}
	}
	Ok(Type::Boolean)
}

pub(crate) fn boolean_arguments(function: &str, ctx: &ScalarFunctionContext) -> Result<Vec<ColumnData>> {
	let mut arguments = Vec::with_capacity(ctx.columns.len());
	for (index, column) in ctx.columns.iter().enumerate() {
		let data = column.data().materialized();
		if !matches!(data, ColumnData::Bool(_)) {
			return Err(TypeError::InvalidArgumentType {
				function: function.to_string(),
				index,
				expected: vec![Type::Boolean],
				actual: data.get_type(),
			}
			.into());
		}
		arguments.push(data);
	}
	Ok(arguments)
}

pub(crate) fn containers(arguments: &[ColumnData]) -> Vec<&BoolContainer> {
	arguments
		.iter()
		.map(|data| match data {
			ColumnData::Bool(container) => container,
			_ => unreachable!(),
		})
		.collect()
}
