// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::ColumnData;
use onyxdb_type::{Result, Type, Value};
use rand::RngExt;

use crate::{Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext};

/// A uniformly random Float8 in [0, 1) per row. Not deterministic, not even
/// within one query, and never foldable at plan time.
pub struct Random;

impl ScalarFunction for Random {
	fn name(&self) -> &str {
		"random"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(0)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			deterministic: false,
			deterministic_in_query: false,
			suitable_for_constant_folding: false,
			..FunctionProperties::default()
		}
	}

	fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
		Ok(Type::Float8)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		let mut rng = rand::rng();
		Ok(ColumnData::float8((0..ctx.row_count).map(|_| rng.random::<f64>())))
	}

	fn scalar_dry_run(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		Ok(ColumnData::constant(Value::float8(0.0), ctx.row_count))
	}
}
