// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{ColumnData, container::NumberContainer};
use onyxdb_type::{Result, Type, TypeError, Value};

use crate::{Arity, FunctionProperties, Monotonicity, ScalarFunction, ScalarFunctionContext};

use super::numeric_types;

/// `clamp(x, lo, hi)` restricts every value of `x` into `[lo, hi]`. The
/// bounds must be constant columns.
pub struct Clamp;

impl Clamp {
	fn invalid_argument(&self, index: usize, actual: Type) -> onyxdb_type::Error {
		TypeError::InvalidArgumentType {
			function: self.name().to_string(),
			index,
			expected: numeric_types(),
			actual,
		}
		.into()
	}
}

impl ScalarFunction for Clamp {
	fn name(&self) -> &str {
		"clamp"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(3)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_constants: true,
			has_monotonicity: true,
			..FunctionProperties::default()
		}
	}

	fn constant_positions(&self) -> Vec<usize> {
		vec![1, 2]
	}

	fn monotonicity(&self, _ty: &Type, _left: &Value, _right: &Value) -> Monotonicity {
		// Non-strict: values outside the bounds collapse onto them.
		Monotonicity::increasing(true)
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		let value = argument_types[0];
		if !value.is_number() {
			return Err(self.invalid_argument(0, value));
		}
		for (index, bound) in argument_types.iter().enumerate().skip(1) {
			if *bound != value {
				return Err(TypeError::InvalidArgumentType {
					function: self.name().to_string(),
					index,
					expected: vec![value],
					actual: *bound,
				}
				.into());
			}
		}
		Ok(value)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		let row_count = ctx.row_count;
		let lo = ctx.columns[1].data().value(0);
		let hi = ctx.columns[2].data().value(0);
		if lo.is_undefined() || hi.is_undefined() {
			// Every result row is undefined through the default handling.
			return Ok(ColumnData::constant(ctx.result_type.default_value(), row_count));
		}
		let data = ctx.columns[0].data().materialized();

		macro_rules! clamp_int {
			($c:ident, $variant:ident) => {{
				let (Value::$variant(lo), Value::$variant(hi)) = (lo, hi) else {
					return Err(self.invalid_argument(1, ctx.columns[1].get_type()));
				};
				let mut result = NumberContainer::with_capacity(row_count);
				for row in 0..row_count {
					match $c.get(row) {
						Some(v) => result.push((*v).max(lo).min(hi)),
						None => result.push_undefined(),
					}
				}
				ColumnData::$variant(result)
			}};
		}

		macro_rules! clamp_float {
			($c:ident, $variant:ident) => {{
				let (Value::$variant(lo), Value::$variant(hi)) = (lo, hi) else {
					return Err(self.invalid_argument(1, ctx.columns[1].get_type()));
				};
				let lo = lo.value();
				let hi = hi.value();
				let mut result = NumberContainer::with_capacity(row_count);
				for row in 0..row_count {
					match $c.get(row) {
						Some(v) => result.push(v.max(lo).min(hi)),
						None => result.push_undefined(),
					}
				}
				ColumnData::$variant(result)
			}};
		}

		let result = match &data {
			ColumnData::Float4(c) => clamp_float!(c, Float4),
			ColumnData::Float8(c) => clamp_float!(c, Float8),
			ColumnData::Int1(c) => clamp_int!(c, Int1),
			ColumnData::Int2(c) => clamp_int!(c, Int2),
			ColumnData::Int4(c) => clamp_int!(c, Int4),
			ColumnData::Int8(c) => clamp_int!(c, Int8),
			ColumnData::Int16(c) => clamp_int!(c, Int16),
			ColumnData::Uint1(c) => clamp_int!(c, Uint1),
			ColumnData::Uint2(c) => clamp_int!(c, Uint2),
			ColumnData::Uint4(c) => clamp_int!(c, Uint4),
			ColumnData::Uint8(c) => clamp_int!(c, Uint8),
			ColumnData::Uint16(c) => clamp_int!(c, Uint16),
			other => return Err(self.invalid_argument(0, other.get_type())),
		};
		Ok(result)
	}
}
