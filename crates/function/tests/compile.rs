// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

#![cfg(feature = "compile")]

use onyxdb_column::{Column, ColumnData, Columns};
use onyxdb_function::{compile::CompiledValue, registry::Functions};
use onyxdb_type::{Type, Value};

#[test]
fn compiled_plus_matches_interpreted_execution() {
	let functions = Functions::standard();
	let resolver = functions.resolver("plus").unwrap();
	let columns = vec![
		Column::new("a", ColumnData::int4([3, -7])),
		Column::new("b", ColumnData::int4([4, 11])),
	];
	let base = resolver.bind(&columns, Type::Int4).unwrap();
	assert!(base.is_compilable());

	let compiled = base
		.compile(&[CompiledValue::input(0, Type::Int4), CompiledValue::input(1, Type::Int4)])
		.unwrap();

	let arguments = Columns::new(columns);
	let interpreted = base.prepare(&arguments).execute(&arguments, &Type::Int4, 2).unwrap();

	for row in 0..2 {
		let inputs = [arguments[0].data().value(row), arguments[1].data().value(row)];
		assert_eq!(compiled.evaluate(&inputs).unwrap(), interpreted.value(row));
	}
}

#[test]
fn compiled_expressions_compose() {
	let functions = Functions::standard();
	let plus = functions.resolver("plus").unwrap();
	let negate = functions.resolver("negate").unwrap();

	let columns = vec![Column::new("x", ColumnData::int8([5i64]))];
	let negate_base = negate.bind(&columns, Type::Int8).unwrap();
	let plus_columns = vec![
		Column::new("a", ColumnData::int8([5i64])),
		Column::new("b", ColumnData::int8([2i64])),
	];
	let plus_base = plus.bind(&plus_columns, Type::Int8).unwrap();

	let inner = plus_base
		.compile(&[CompiledValue::input(0, Type::Int8), CompiledValue::constant(Value::Int8(2))])
		.unwrap();
	let outer = negate_base.compile(&[inner]).unwrap();

	assert_eq!(outer.evaluate(&[Value::Int8(5)]).unwrap(), Value::Int8(-7));
}

#[test]
fn compilation_is_gated_by_capability() {
	let functions = Functions::standard();
	let resolver = functions.resolver("default_of").unwrap();
	let columns = vec![Column::new("t", ColumnData::constant(Value::utf8("Int4"), 1))];
	let base = resolver.bind(&columns, Type::Int4).unwrap();

	assert!(!base.is_compilable());
	let err = base.compile(&[CompiledValue::input(0, Type::Utf8)]).unwrap_err();
	assert!(err.is_illegal_argument());
}
