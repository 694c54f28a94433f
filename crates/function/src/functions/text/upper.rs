// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::ColumnData;
use onyxdb_type::{Result, Type};

use crate::{Arity, FunctionProperties, ScalarFunction, ScalarFunctionContext};

use super::{map_utf8, utf8_return_type};

/// Uppercase mapping over text. Runs directly on a dictionary's distinct
/// values when the argument is dictionary-encoded.
pub struct Upper;

impl ScalarFunction for Upper {
	fn name(&self) -> &str {
		"upper"
	}

	fn arity(&self) -> Arity {
		Arity::Exact(1)
	}

	fn properties(&self) -> FunctionProperties {
		FunctionProperties {
			default_for_constants: true,
			executable_on_dictionary: true,
			..FunctionProperties::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		utf8_return_type(self.name(), argument_types)
	}

	fn scalar(&self, ctx: ScalarFunctionContext) -> Result<ColumnData> {
		map_utf8(self.name(), &ctx, |value| value.to_uppercase())
	}
}
