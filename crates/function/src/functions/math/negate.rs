// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{ColumnData, Columns, container::NumberContainer};
use onyxdb_type::{Result, Type, TypeError, Value};

use crate::{
	Arity, FunctionProperties, Monotonicity, ScalarFunction, ScalarFunctionContext, ValueInterval,
};

use super::signed_types;

#[cfg(feature = "compile")]
use crate::compile::CompiledValue;

/// Numeric negation. Always monotonically decreasing and injective, so an
/// output-range predicate can be rewritten onto the input; the preimage of
/// an output point is the negated point.
pub struct Negate;

impl ScalarFunction for Negate {
	fn name(&self) -> &str {
		"negate"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(1)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_constants: true,
			compilable: true,
			has_monotonicity: true,
			has_preimage: true,
			..FunctionProperties::default()
		}
	}

	fn is_injective(&self, _sample: &Columns) -> bool {
		true
	}

	fn monotonicity(&self, _ty: &Type, _left: &Value, _right: &Value) -> Monotonicity {
		Monotonicity::decreasing(true)
	}

	fn preimage(&self, ty: &Type, point: &Value) -> Option<ValueInterval> {
		if point.get_type() != *ty {
			return None;
		}
		let negated = match point {
			Value::Float4(v) => Value::float4(-v.value()),
			Value::Float8(v) => Value::float8(-v.value()),
			Value::Int1(v) => Value::Int1(v.checked_neg()?),
			Value::Int2(v) => Value::Int2(v.checked_neg()?),
			Value::Int4(v) => Value::Int4(v.checked_neg()?),
			Value::Int8(v) => Value::Int8(v.checked_neg()?),
			Value::Int16(v) => Value::Int16(v.checked_neg()?),
			_ => return None,
		};
		Some(ValueInterval::point(negated))
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		let argument = argument_types[0];
		if !argument.is_number() || !argument.is_signed() {
			return Err(TypeError::InvalidArgumentType {
				function: self.name().to_string(),
				index: 0,
				expected: signed_types(),
				actual: argument,
			}
			.into());
		}
		Ok(argument)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		let row_count = ctx.row_count;
		let data = ctx.columns[0].data().materialized();

		macro_rules! negate_int {
			($c:ident, $variant:ident) => {{
				let mut result = NumberContainer::with_capacity(row_count);
				for row in 0..row_count {
					match $c.get(row).and_then(|v| v.checked_neg()) {
						Some(v) => result.push(v),
						None => result.push_undefined(),
					}
				}
				ColumnData::$variant(result)
			}};
		}

		macro_rules! negate_float {
			($c:ident, $variant:ident) => {{
				let mut result = NumberContainer::with_capacity(row_count);
				for row in 0..row_count {
					match $c.get(row) {
						Some(v) => result.push(-v),
						None => result.push_undefined(),
					}
				}
				ColumnData::$variant(result)
			}};
		}

		let result = match &data {
			ColumnData::Float4(c) => negate_float!(c, Float4),
			ColumnData::Float8(c) => negate_float!(c, Float8),
			ColumnData::Int1(c) => negate_int!(c, Int1),
			ColumnData::Int2(c) => negate_int!(c, Int2),
			ColumnData::Int4(c) => negate_int!(c, Int4),
			ColumnData::Int8(c) => negate_int!(c, Int8),
			ColumnData::Int16(c) => negate_int!(c, Int16),
			other => {
				return Err(TypeError::InvalidArgumentType {
					function: self.name().to_string(),
					index: 0,
					expected: signed_types(),
					actual: other.get_type(),
				}
				.into());
			}
		};
		Ok(result)
	}

	#[cfg(feature = "compile")]
	fn compile(&self, arguments: &[CompiledValue], _result_type: &Type) -> Result<CompiledValue> {
		Ok(CompiledValue::negate(arguments[0].clone()))
	}
}

#[cfg(test)]
pub mod tests {
	use std::sync::Arc;

	use onyxdb_column::Column;

	use crate::FunctionOverloadResolver;

	use super::*;

	fn execute(data: ColumnData, row_count: usize) -> ColumnData {
		let columns = vec![Column::new("a", data)];
		let resolver = FunctionOverloadResolver::new(Arc::new(Negate));
		let result_type = resolver.resolve_type_for_columns(&columns).unwrap();
		let base = resolver.bind(&columns, result_type).unwrap();
		let arguments = Columns::new(columns);
		base.prepare(&arguments).execute(&arguments, &result_type, row_count).unwrap()
	}

	#[test]
	fn test_negate_ints() {
		assert_eq!(execute(ColumnData::int4([1, -2, 0]), 3), ColumnData::int4([-1, 2, 0]));
	}

	#[test]
	fn test_negate_floats() {
		assert_eq!(execute(ColumnData::float8([1.5, -2.5]), 2), ColumnData::float8([-1.5, 2.5]));
	}

	#[test]
	fn test_negate_minimum_is_undefined() {
		let result = execute(ColumnData::int1([i8::MIN, 1]), 2);
		assert_eq!(result.value(0), Value::Undefined);
		assert_eq!(result.value(1), Value::Int1(-1));
	}

	#[test]
	fn test_unsigned_rejected() {
		let resolver = FunctionOverloadResolver::new(Arc::new(Negate));
		assert!(resolver.resolve_type(&[Type::Uint4]).unwrap_err().is_type_error());
	}

	#[test]
	fn test_monotonicity_is_decreasing_everywhere() {
		let monotonicity = Negate.monotonicity(&Type::Int4, &Value::int4(-10), &Value::int4(10));
		assert!(monotonicity.is_monotonic);
		assert!(!monotonicity.is_positive);
		assert!(monotonicity.is_always_monotonic);
	}

	#[test]
	fn test_preimage_is_negated_point() {
		let interval = Negate.preimage(&Type::Int4, &Value::int4(5)).unwrap();
		assert_eq!(interval, ValueInterval::point(Value::int4(-5)));
	}

	#[test]
	fn test_preimage_overflow_absent() {
		assert_eq!(Negate.preimage(&Type::Int1, &Value::Int1(i8::MIN)), None);
	}

	#[test]
	fn test_preimage_type_mismatch_absent() {
		assert_eq!(Negate.preimage(&Type::Int4, &Value::Int8(5)), None);
	}
}
