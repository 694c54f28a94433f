// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

mod lower;
mod upper;

pub use lower::Lower;
pub use upper::Upper;

use onyxdb_column::{ColumnData, container::Utf8Container};
use onyxdb_type::{Result, Type, TypeError};

use crate::ScalarFunctionContext;

pub(crate) fn utf8_return_type(function: &str, argument_types: &[Type]) -> Result<Type> {
	let argument = argument_types[0];
	if argument != Type::Utf8 {
		return Err(TypeError::InvalidArgumentType {
			function: function.to_string(),
			index: 0,
			expected: vec![Type::Utf8],
			actual: argument,
		}
		.into());
	}
	Ok(Type::Utf8)
}

pub(crate) fn map_utf8(
	function: &str,
	ctx: &ScalarFunctionContext,
	apply: impl Fn(&str) -> String,
) -> Result<ColumnData> {
	let data = ctx.columns[0].data().materialized();
	let ColumnData::Utf8(container) = &data else {
		return Err(TypeError::InvalidArgumentType {
			function: function.to_string(),
			index: 0,
			expected: vec![Type::Utf8],
			actual: data.get_type(),
		}
		.into());
	};

	let mut result = Utf8Container::with_capacity(ctx.row_count);
	for row in 0..ctx.row_count {
		match container.get(row) {
			Some(value) => result.push(apply(value)),
			None => result.push_undefined(),
		}
	}
	Ok(ColumnData::Utf8(result))
}
