// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_column::{Column, ColumnData, Columns};
use onyxdb_function::registry::Functions;
use onyxdb_type::{Result, Type, TypeError, Value};

fn run(functions: &Functions, name: &str, columns: Vec<Column>, row_count: usize) -> Result<ColumnData> {
	let resolver = functions.resolver(name)?;
	let result_type = resolver.resolve_type_for_columns(&columns)?;
	let base = resolver.bind(&columns, result_type)?;
	let arguments = Columns::new(columns);
	let executable = base.prepare(&arguments);
	executable.execute(&arguments, &result_type, row_count)
}

#[test]
fn chain_succeeds_for_every_row_count() {
	let functions = Functions::standard();
	for row_count in [0usize, 1, 7] {
		let a: Vec<i32> = (0..row_count as i32).collect();
		let b: Vec<i32> = (0..row_count as i32).map(|v| v * 10).collect();
		let columns = vec![
			Column::new("a", ColumnData::int4(a.clone())),
			Column::new("b", ColumnData::int4(b.clone())),
		];
		let result = run(&functions, "plus", columns, row_count).unwrap();

		assert_eq!(result.len(), row_count);
		for row in 0..row_count {
			assert_eq!(result.value(row), Value::Int4(a[row] + b[row]));
		}
	}
}

#[test]
fn resolution_is_deterministic() {
	let functions = Functions::standard();
	let resolver = functions.resolver("plus").unwrap();
	let types = [Type::Int8, Type::Int8];
	let first = resolver.resolve_type(&types).unwrap();
	for _ in 0..8 {
		assert_eq!(resolver.resolve_type(&types).unwrap(), first);
	}
}

#[test]
fn constant_execution_matches_expanded_execution() {
	let functions = Functions::standard();
	for row_count in [1usize, 3, 8] {
		let constant_columns = vec![
			Column::new("a", ColumnData::constant(Value::Int4(21), row_count)),
			Column::new("b", ColumnData::constant(Value::Int4(2), row_count)),
		];
		let expanded_columns = vec![
			Column::new("a", ColumnData::constant(Value::Int4(21), row_count).materialized()),
			Column::new("b", ColumnData::constant(Value::Int4(2), row_count).materialized()),
		];

		let constant = run(&functions, "plus", constant_columns, row_count).unwrap();
		let expanded = run(&functions, "plus", expanded_columns, row_count).unwrap();

		assert!(constant.is_constant());
		assert_eq!(constant.materialized(), expanded.materialized());
	}
}

#[test]
fn deterministic_execution_is_bit_identical() {
	let functions = Functions::standard();
	let columns = vec![
		Column::new("a", ColumnData::float8([0.1, 0.2, 0.3])),
		Column::new("b", ColumnData::float8([1.0, 2.0, 3.0])),
	];
	assert!(functions.resolver("plus").unwrap().is_deterministic());

	let first = run(&functions, "plus", columns.clone(), 3).unwrap();
	let second = run(&functions, "plus", columns, 3).unwrap();
	assert_eq!(first, second);
}

#[test]
fn monotonicity_is_consistent_with_evaluation() {
	let functions = Functions::standard();
	let resolver = functions.resolver("negate").unwrap();
	let columns = vec![Column::new("x", ColumnData::int4([-10, -3, 0, 4, 10]))];
	let result_type = resolver.resolve_type_for_columns(&columns).unwrap();
	let base = resolver.bind(&columns, result_type).unwrap();

	assert!(base.has_monotonicity_info());
	let monotonicity =
		base.monotonicity_for_range(&Type::Int4, &Value::Int4(-10), &Value::Int4(10));
	assert!(monotonicity.is_monotonic);

	let arguments = Columns::new(columns);
	let result = base.prepare(&arguments).execute(&arguments, &result_type, 5).unwrap();

	// Sampled inputs are increasing, so a negative-direction monotonic
	// function must produce non-increasing outputs.
	let outputs: Vec<Value> = (0..5).map(|row| result.value(row)).collect();
	for pair in outputs.windows(2) {
		let ordering = pair[0].partial_cmp(&pair[1]).unwrap();
		if monotonicity.is_positive {
			assert!(ordering.is_le());
		} else {
			assert!(ordering.is_ge());
		}
	}
}

#[test]
fn preimage_reproduces_the_point() {
	let functions = Functions::standard();
	let resolver = functions.resolver("negate").unwrap();
	let columns = vec![Column::new("x", ColumnData::int4([0]))];
	let base = resolver.bind(&columns, Type::Int4).unwrap();

	assert!(base.has_preimage_info());
	let point = Value::Int4(5);
	let interval = base.preimage(&Type::Int4, &point).unwrap();

	// Every input within the interval must evaluate back to the point.
	let mut sample = Vec::new();
	for candidate in -10..=10 {
		let value = Value::Int4(candidate);
		if interval.contains(&value) {
			sample.push(candidate);
		}
	}
	assert!(!sample.is_empty());
	let arguments = vec![Column::new("x", ColumnData::int4(sample.clone()))];
	let result = run(&functions, "negate", arguments, sample.len()).unwrap();
	for row in 0..sample.len() {
		assert_eq!(result.value(row), point);
	}
}

#[test]
fn default_of_scenario() {
	let functions = Functions::standard();

	// Constant "Int4" over three rows: a three-row constant zero column.
	let columns = vec![Column::new("t", ColumnData::constant(Value::utf8("Int4"), 3))];
	let result = run(&functions, "default_of", columns, 3).unwrap();
	assert!(result.is_constant());
	assert_eq!(result.len(), 3);
	assert_eq!(result.constant_value(), Some(Value::Int4(0)));

	// Constant "Utf8" over one row: a one-row constant empty string.
	let columns = vec![Column::new("t", ColumnData::constant(Value::utf8("Utf8"), 1))];
	let result = run(&functions, "default_of", columns, 1).unwrap();
	assert_eq!(result.len(), 1);
	assert_eq!(result.constant_value(), Some(Value::utf8("")));

	// A non-constant first argument is a precondition violation.
	let columns = vec![Column::new("t", ColumnData::utf8(["Int4", "Int8", "Utf8"]))];
	let err = run(&functions, "default_of", columns, 3).unwrap_err();
	assert!(err.is_illegal_argument());

	// An unknown type name fails inside the type catalog.
	let columns = vec![Column::new("t", ColumnData::constant(Value::utf8("NotARealType"), 1))];
	let err = run(&functions, "default_of", columns, 1).unwrap_err();
	assert_eq!(
		err,
		TypeError::UnknownType {
			name: "NotARealType".to_string()
		}
		.into()
	);
}

#[test]
fn default_of_is_never_short_circuit_suitable() {
	use onyxdb_function::TypeConstInfo;

	let functions = Functions::standard();
	let resolver = functions.resolver("default_of").unwrap();
	for info in [
		vec![TypeConstInfo::new(Type::Utf8, true)],
		vec![TypeConstInfo::new(Type::Utf8, false)],
		vec![TypeConstInfo::new(Type::Int4, true)],
	] {
		assert!(!resolver.suitable_for_short_circuit(&info));
	}
}

#[test]
fn short_circuit_settings_for_logical_functions() {
	let functions = Functions::standard();
	let resolver = functions.resolver("and").unwrap();
	let settings = resolver.short_circuit(3).unwrap();
	assert_eq!(settings.lazy_positions, vec![1, 2]);

	assert!(functions.resolver("plus").unwrap().short_circuit(2).is_none());
}

#[test]
fn failures_do_not_poison_resolver_or_binding() {
	let functions = Functions::standard();
	let resolver = functions.resolver("plus").unwrap();

	// Resolution failure, then success with the same resolver.
	assert!(resolver.resolve_type(&[Type::Utf8, Type::Utf8]).is_err());
	assert_eq!(resolver.resolve_type(&[Type::Int4, Type::Int4]).unwrap(), Type::Int4);

	// Execution failure, then success with the same binding.
	let columns = vec![
		Column::new("a", ColumnData::int4([1, 2])),
		Column::new("b", ColumnData::int4([3, 4])),
	];
	let base = resolver.bind(&columns, Type::Int4).unwrap();
	let good = Columns::new(columns);
	let bad = Columns::new(vec![
		Column::new("a", ColumnData::utf8(["x", "y"])),
		Column::new("b", ColumnData::int4([3, 4])),
	]);

	let executable = base.prepare(&good);
	assert!(executable.execute(&bad, &Type::Int4, 2).unwrap_err().is_column_type_error());
	let result = executable.execute(&good, &Type::Int4, 2).unwrap();
	assert_eq!(result, ColumnData::int4([4, 6]));
}

#[test]
fn dictionary_execution_matches_materialized_execution() {
	let functions = Functions::standard();
	let dictionary = ColumnData::dictionary(vec![0, 1, 1, 0, 2], ColumnData::utf8(["a", "b", "c"]));

	let fast = run(
		&functions,
		"upper",
		vec![Column::new("s", dictionary.clone())],
		5,
	)
	.unwrap();
	let slow = run(
		&functions,
		"upper",
		vec![Column::new("s", dictionary.materialized())],
		5,
	)
	.unwrap();

	assert!(matches!(fast, ColumnData::Dictionary(_)));
	assert_eq!(fast.materialized(), slow.materialized());
}

#[test]
fn sparse_execution_matches_materialized_execution() {
	let functions = Functions::standard();
	let sparse = ColumnData::sparse(5, vec![1, 4], ColumnData::int8([100i64, 400]));
	let dense = ColumnData::int8([1i64, 2, 3, 4, 5]);

	let from_sparse = run(
		&functions,
		"plus",
		vec![Column::new("a", sparse.clone()), Column::new("b", dense.clone())],
		5,
	)
	.unwrap();
	let from_materialized = run(
		&functions,
		"plus",
		vec![Column::new("a", sparse.materialized()), Column::new("b", dense)],
		5,
	)
	.unwrap();

	assert_eq!(from_sparse, from_materialized);
	assert_eq!(from_sparse, ColumnData::int8([1i64, 102, 3, 4, 405]));
}

#[test]
fn dry_run_resolves_shape_without_computing() {
	let functions = Functions::standard();
	let resolver = functions.resolver("random").unwrap();
	let base = resolver.bind(&[], Type::Float8).unwrap();
	let arguments = Columns::empty();
	let executable = base.prepare(&arguments);

	let estimated = executable.execute_dry_run(&arguments, &Type::Float8, 9).unwrap();
	assert_eq!(estimated.len(), 9);
	assert_eq!(estimated.constant_value(), Some(Value::float8(0.0)));
}

#[test]
fn bindings_are_shared_across_threads() {
	let functions = Functions::standard();
	let resolver = functions.resolver("plus").unwrap();
	let columns = vec![
		Column::new("a", ColumnData::int8([1i64, 2, 3])),
		Column::new("b", ColumnData::int8([10i64, 20, 30])),
	];
	let base = resolver.bind(&columns, Type::Int8).unwrap();
	let arguments = Columns::new(columns);

	std::thread::scope(|scope| {
		for _ in 0..4 {
			let base = &base;
			let arguments = &arguments;
			scope.spawn(move || {
				let executable = base.prepare(arguments);
				let result = executable.execute(arguments, &Type::Int8, 3).unwrap();
				assert_eq!(result, ColumnData::int8([11i64, 22, 33]));
			});
		}
	});
}

#[test]
fn unknown_function_lookup_fails() {
	let functions = Functions::standard();
	let err = functions.resolver("definitely_missing").unwrap_err();
	assert_eq!(
		err,
		TypeError::UnknownFunction {
			name: "definitely_missing".to_string()
		}
		.into()
	);
}
