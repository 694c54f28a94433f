// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use std::sync::Arc;

use onyxdb_column::{Column, ColumnData, Columns};
use onyxdb_type::{ColumnTypeError, Result, Type, util::BitVec};
use tracing::trace;

use crate::{FunctionProperties, ScalarFunction, ScalarFunctionContext};

/// A run-ready instance produced from a binding for one call site. Holds no
/// state beyond the shared definition handle and the bound signature; cheap
/// to construct repeatedly.
pub struct ExecutableFunction {
	function: Arc<dyn ScalarFunction>,
	properties: FunctionProperties,
	argument_types: Vec<Type>,
}

impl ExecutableFunction {
	pub(crate) fn new(
		function: Arc<dyn ScalarFunction>,
		properties: FunctionProperties,
		argument_types: Vec<Type>,
	) -> Self {
		Self {
			function,
			properties,
			argument_types,
		}
	}

	pub fn name(&self) -> &str {
		self.function.name()
	}

	pub fn properties(&self) -> FunctionProperties {
		self.properties
	}

	pub fn constant_positions(&self) -> Vec<usize> {
		self.function.constant_positions()
	}

	pub fn can_execute_on_default_arguments(&self) -> bool {
		self.function.can_execute_on_default_arguments()
	}

	/// Execute against runtime columns, returning exactly `row_count` values
	/// (or a constant column of that count). The default column-handling
	/// policies the definition opted into are applied around the body.
	pub fn execute(&self, arguments: &Columns, result_type: &Type, row_count: usize) -> Result<ColumnData> {
		self.validate(arguments, row_count)?;
		self.execute_with_defaults(arguments, result_type, row_count, false)
	}

	/// The same resolution as [`ExecutableFunction::execute`] without the
	/// obligation to materialize meaningful values, for cost and shape
	/// estimation of branches that may never run.
	pub fn execute_dry_run(
		&self,
		arguments: &Columns,
		result_type: &Type,
		row_count: usize,
	) -> Result<ColumnData> {
		self.validate(arguments, row_count)?;
		self.execute_with_defaults(arguments, result_type, row_count, true)
	}

	fn validate(&self, arguments: &Columns, row_count: usize) -> Result<()> {
		if arguments.len() != self.argument_types.len() {
			return Err(ColumnTypeError::ArgumentCount {
				function: self.name().to_string(),
				expected: self.argument_types.len(),
				actual: arguments.len(),
			}
			.into());
		}
		for (index, column) in arguments.iter().enumerate() {
			let expected = self.argument_types[index];
			let actual = column.get_type();
			if expected != Type::Any && actual != expected {
				return Err(ColumnTypeError::ArgumentTypeMismatch {
					function: self.name().to_string(),
					index,
					expected,
					actual,
				}
				.into());
			}
			if column.len() != row_count {
				return Err(ColumnTypeError::ArgumentRowCount {
					function: self.name().to_string(),
					index,
					expected: row_count,
					actual: column.len(),
				}
				.into());
			}
		}
		Ok(())
	}

	fn execute_with_defaults(
		&self,
		arguments: &Columns,
		result_type: &Type,
		row_count: usize,
		dry_run: bool,
	) -> Result<ColumnData> {
		let props = &self.properties;

		if props.default_for_nothing && arguments.iter().any(|c| c.get_type() == Type::Undefined) {
			trace!(function = self.name(), "undefined argument type, skipping execution");
			return Ok(ColumnData::undefined(row_count));
		}

		if props.executable_on_dictionary {
			if let Some(result) = self.execute_on_dictionary(arguments, result_type, dry_run)? {
				return Ok(result);
			}
		}

		let mut columns = Vec::with_capacity(arguments.len());
		for column in arguments.iter() {
			let data = match column.data() {
				ColumnData::Sparse(_) if props.default_for_sparse => column.data().materialized(),
				ColumnData::Dictionary(_) if props.default_for_dictionary => {
					column.data().materialized()
				}
				other => other.clone(),
			};
			columns.push(Column::new(column.name(), data));
		}

		if props.default_for_constants && !columns.is_empty() && columns.iter().all(|c| c.is_constant())
		{
			trace!(function = self.name(), "all-constant arguments, executing on one row");
			let keep_constant = self.function.constant_positions();
			let unwrapped = columns
				.iter()
				.enumerate()
				.map(|(index, column)| {
					let data = column.data().take(1);
					let data = if keep_constant.contains(&index) {
						data
					} else {
						data.materialized()
					};
					Column::new(column.name(), data)
				})
				.collect();
			let result = self.execute_body(&Columns::new(unwrapped), result_type, 1, dry_run)?;
			return Ok(result.into_constant(row_count));
		}

		self.execute_body(&Columns::new(columns), result_type, row_count, dry_run)
	}

	fn execute_body(
		&self,
		columns: &Columns,
		result_type: &Type,
		row_count: usize,
		dry_run: bool,
	) -> Result<ColumnData> {
		let mut mask: Option<BitVec> = None;
		if self.properties.default_for_undefined {
			let skip = self.function.non_propagating_positions(columns.len());
			let mut undefined = BitVec::repeat(false, row_count);
			let mut any = false;
			for (index, column) in columns.iter().enumerate() {
				if skip.contains(&index) || column.data().is_fully_defined() {
					continue;
				}
				for row in 0..row_count {
					if !column.data().is_defined(row) {
						undefined.set(row, true);
						any = true;
					}
				}
			}
			if any {
				mask = Some(undefined);
			}
		}

		let ctx = ScalarFunctionContext {
			columns,
			result_type: *result_type,
			row_count,
		};
		let mut result = if dry_run {
			self.function.scalar_dry_run(ctx)?
		} else {
			self.function.scalar(ctx)?
		};

		if result.len() != row_count {
			return Err(ColumnTypeError::ResultRowCount {
				function: self.name().to_string(),
				expected: row_count,
				actual: result.len(),
			}
			.into());
		}

		if let Some(mask) = mask {
			result.undefine_where(&mask);
		}
		Ok(result)
	}

	/// Fast path for a single dictionary-encoded argument (all others
	/// constant): run the body over the distinct values only and re-index
	/// the result by the original mapping.
	fn execute_on_dictionary(
		&self,
		arguments: &Columns,
		result_type: &Type,
		dry_run: bool,
	) -> Result<Option<ColumnData>> {
		let mut dictionary_position = None;
		for (index, column) in arguments.iter().enumerate() {
			match column.data() {
				ColumnData::Dictionary(_) => {
					if dictionary_position.is_some() {
						return Ok(None);
					}
					dictionary_position = Some(index);
				}
				ColumnData::Constant(_) => {}
				_ => return Ok(None),
			}
		}
		let Some(position) = dictionary_position else {
			return Ok(None);
		};
		let ColumnData::Dictionary(dictionary) = arguments[position].data() else {
			return Ok(None);
		};

		let distinct = dictionary.values().len();
		trace!(function = self.name(), distinct, "executing on dictionary values");

		let mut columns = Vec::with_capacity(arguments.len());
		for (index, column) in arguments.iter().enumerate() {
			if index == position {
				columns.push(Column::new(column.name(), dictionary.values().clone()));
				continue;
			}
			let Some(value) = column.constant_value() else {
				return Ok(None);
			};
			columns.push(Column::new(column.name(), ColumnData::constant(value, distinct)));
		}

		let result = self.execute_body(&Columns::new(columns), result_type, distinct, dry_run)?;
		let result = result.materialized();
		Ok(Some(ColumnData::Dictionary(dictionary.with_values(result))))
	}
}
