// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{ColumnData, Columns};
use onyxdb_type::{Result, Type, Value};

use crate::{Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext};

/// Evaluates to constant zero whatever its arguments are. Useful to force
/// evaluation of an expression while discarding its value; the optimizer may
/// fold it without looking at the arguments.
pub struct Ignore;

impl ScalarFunction for Ignore {
	fn name(&self) -> &str {
		"ignore"
	}

	fn arity(&self) -> Arity {
		Arity::Variadic {
			min: 0,
			max: None,
		}
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_undefined: false,
			default_for_nothing: false,
			..FunctionProperties::default()
		}
	}

	fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
		Ok(Type::Uint1)
	}

	fn dynamic_return_type(&self) -> Option<Type> {
		Some(Type::Uint1)
	}

	fn constant_result_for_nonconst_arguments(
		&self,
		arguments: &Columns,
		_result_type: &Type,
	) -> Option<ColumnData> {
		Some(ColumnData::constant(Value::Uint1(0), arguments.row_count()))
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		Ok(ColumnData::constant(Value::Uint1(0), ctx.row_count))
	}
}

#[cfg(test)]
pub mod tests {
	use std::sync::Arc;

	use onyxdb_column::Column;

	use crate::FunctionOverloadResolver;

	use super::*;

	#[test]
	fn test_zero_for_any_arguments() {
		let columns = vec![
			Column::new("a", ColumnData::int4([1, 2, 3])),
			Column::new("b", ColumnData::utf8(["x", "y", "z"])),
		];
		let resolver = FunctionOverloadResolver::new(Arc::new(Ignore));
		let result_type = resolver.resolve_type_for_columns(&columns).unwrap();
		assert_eq!(result_type, Type::Uint1);

		let base = resolver.bind(&columns, result_type).unwrap();
		let arguments = Columns::new(columns);
		let result = base.prepare(&arguments).execute(&arguments, &result_type, 3).unwrap();

		assert!(result.is_constant());
		assert_eq!(result.constant_value(), Some(Value::Uint1(0)));
	}

	#[test]
	fn test_constant_result_without_execution() {
		let resolver = FunctionOverloadResolver::new(Arc::new(Ignore));
		let columns = vec![Column::new("a", ColumnData::int4([5, 6]))];
		let base = resolver.bind(&columns, Type::Uint1).unwrap();

		let folded = base.constant_result_for_nonconst_arguments(&Columns::new(columns)).unwrap();
		assert_eq!(folded, ColumnData::constant(Value::Uint1(0), 2));
	}

	#[test]
	fn test_accepts_zero_arguments() {
		let resolver = FunctionOverloadResolver::new(Arc::new(Ignore));
		assert_eq!(resolver.resolve_type(&[]).unwrap(), Type::Uint1);
	}

	#[test]
	fn test_dynamic_argument_still_resolves_to_zero_type() {
		let resolver = FunctionOverloadResolver::new(Arc::new(Ignore));
		assert_eq!(resolver.resolve_type(&[Type::Any]).unwrap(), Type::Uint1);
	}
}
