// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::ColumnData;
use onyxdb_type::{Result, Type, TypeError};

use crate::{Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext};

use super::numeric_types;

#[cfg(feature = "compile")]
use crate::compile::CompiledValue;

/// Numeric addition over two columns of the same type. Integer addition
/// wraps.
pub struct Plus;

impl ScalarFunction for Plus {
	fn name(&self) -> &str {
		"plus"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(2)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_constants: true,
			compilable: true,
			..FunctionProperties::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		let left = argument_types[0];
		let right = argument_types[1];
		if !left.is_number() {
			return Err(TypeError::InvalidArgumentType {
				function: self.name().to_string(),
				index: 0,
				expected: numeric_types(),
				actual: left,
			}
			.into());
		}
		if right != left {
			return Err(TypeError::InvalidArgumentType {
				function: self.name().to_string(),
				index: 1,
				expected: vec![left],
				actual: right,
			}
			.into());
		}
		Ok(left)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		let row_count = ctx.row_count;
		let left = ctx.columns[0].data().materialized();
		let right = ctx.columns[1].data().materialized();

		macro_rules! add_int {
			($a:ident, $b:ident, $ctor:ident) => {{
				let mut result = Vec::with_capacity(row_count);
				for row in 0..row_count {
					let x = $a.get(row).copied().unwrap_or_default();
					let y = $b.get(row).copied().unwrap_or_default();
					result.push(x.wrapping_add(y));
				}
				ColumnData::$ctor(result)
			}};
		}

		macro_rules! add_float {
			($a:ident, $b:ident, $ctor:ident) => {{
				let mut result = Vec::with_capacity(row_count);
				for row in 0..row_count {
					let x = $a.get(row).copied().unwrap_or_default();
					let y = $b.get(row).copied().unwrap_or_default();
					result.push(x + y);
				}
				ColumnData::$ctor(result)
			}};
		}

		let result = match (&left, &right) {
			(ColumnData::Float4(a), ColumnData::Float4(b)) => add_float!(a, b, float4),
			(ColumnData::Float8(a), ColumnData::Float8(b)) => add_float!(a, b, float8),
			(ColumnData::Int1(a), ColumnData::Int1(b)) => add_int!(a, b, int1),
			(ColumnData::Int2(a), ColumnData::Int2(b)) => add_int!(a, b, int2),
			(ColumnData::Int4(a), ColumnData::Int4(b)) => add_int!(a, b, int4),
			(ColumnData::Int8(a), ColumnData::Int8(b)) => add_int!(a, b, int8),
			(ColumnData::Int16(a), ColumnData::Int16(b)) => add_int!(a, b, int16),
			(ColumnData::Uint1(a), ColumnData::Uint1(b)) => add_int!(a, b, uint1),
			(ColumnData::Uint2(a), ColumnData::Uint2(b)) => add_int!(a, b, uint2),
			(ColumnData::Uint4(a), ColumnData::Uint4(b)) => add_int!(a, b, uint4),
			(ColumnData::Uint8(a), ColumnData::Uint8(b)) => add_int!(a, b, uint8),
			(ColumnData::Uint16(a), ColumnData::Uint16(b)) => add_int!(a, b, uint16),
			(left, _) => {
				return Err(TypeError::InvalidArgumentType {
					function: self.name().to_string(),
					index: 0,
					expected: numeric_types(),
					actual: left.get_type(),
				}
				.into());
			}
		};
		Ok(result)
	}

	#[cfg(feature = "compile")]
	fn compile(&self, arguments: &[CompiledValue], _result_type: &Type) -> Result<CompiledValue> {
		Ok(CompiledValue::add(arguments[0].clone(), arguments[1].clone()))
	}
}

#[cfg(test)]
pub mod tests {
	use std::sync::Arc;

	use onyxdb_column::{Column, Columns};
	use onyxdb_type::Value;

	use crate::FunctionOverloadResolver;

	use super::*;

	fn execute(columns: Vec<Column>, row_count: usize) -> ColumnData {
		let resolver = FunctionOverloadResolver::new(Arc::new(Plus));
		let result_type = resolver.resolve_type_for_columns(&columns).unwrap();
		let base = resolver.bind(&columns, result_type).unwrap();
		let arguments = Columns::new(columns);
		base.prepare(&arguments).execute(&arguments, &result_type, row_count).unwrap()
	}

	#[test]
	fn test_int_addition() {
		let result = execute(
			vec![
				Column::new("a", ColumnData::int4([1, 2, 3])),
				Column::new("b", ColumnData::int4([10, 20, 30])),
			],
			3,
		);
		assert_eq!(result, ColumnData::int4([11, 22, 33]));
	}

	#[test]
	fn test_float_addition() {
		let result = execute(
			vec![
				Column::new("a", ColumnData::float8([0.5, 1.5])),
				Column::new("b", ColumnData::float8([1.0, 2.0])),
			],
			2,
		);
		assert_eq!(result, ColumnData::float8([1.5, 3.5]));
	}

	#[test]
	fn test_wrapping_overflow() {
		let result = execute(
			vec![
				Column::new("a", ColumnData::int1([i8::MAX])),
				Column::new("b", ColumnData::int1([1])),
			],
			1,
		);
		assert_eq!(result, ColumnData::int1([i8::MIN]));
	}

	#[test]
	fn test_mismatched_types_rejected() {
		let resolver = FunctionOverloadResolver::new(Arc::new(Plus));
		let err = resolver.resolve_type(&[Type::Int4, Type::Int8]).unwrap_err();
		assert!(err.is_type_error());

		let err = resolver.resolve_type(&[Type::Utf8, Type::Utf8]).unwrap_err();
		assert!(err.is_type_error());
	}

	#[test]
	fn test_constant_argument_broadcasts() {
		let result = execute(
			vec![
				Column::new("a", ColumnData::int8([1i64, 2, 3])),
				Column::new("b", ColumnData::constant(Value::Int8(100), 3)),
			],
			3,
		);
		assert_eq!(result, ColumnData::int8([101i64, 102, 103]));
	}
}
