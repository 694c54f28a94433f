// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use onyxdb_type::{IllegalArgumentError, Result, Type, Value};

/// A symbolic value in the native-code backend: either a reference to an
/// argument position, a constant, or an operation over other symbolic
/// values. Compilation is pure and retains no state across invocations.
#[derive(Clone, Debug, PartialEq)]
pub enum CompiledValue {
	Input(usize, Type),
	Constant(Value),
	Negate(Box<CompiledValue>),
	Add(Box<CompiledValue>, Box<CompiledValue>),
}

impl CompiledValue {
	pub fn input(position: usize, ty: Type) -> Self {
		CompiledValue::Input(position, ty)
	}

	pub fn constant(value: Value) -> Self {
		CompiledValue::Constant(value)
	}

	pub fn negate(inner: CompiledValue) -> Self {
		CompiledValue::Negate(Box::new(inner))
	}

	pub fn add(left: CompiledValue, right: CompiledValue) -> Self {
		CompiledValue::Add(Box::new(left), Box::new(right))
	}

	/// Evaluate the symbolic value over concrete inputs.
	pub fn evaluate(&self, inputs: &[Value]) -> Result<Value> {
		match self {
			CompiledValue::Input(position, _) => {
				inputs.get(*position).cloned().ok_or_else(|| {
					IllegalArgumentError::Precondition {
						function: "compiled value".to_string(),
						message: format!("missing input at position {}", position),
					}
					.into()
				})
			}
			CompiledValue::Constant(value) => Ok(value.clone()),
			CompiledValue::Negate(inner) => Ok(negate_value(inner.evaluate(inputs)?)),
			CompiledValue::Add(left, right) => {
				add_values(left.evaluate(inputs)?, right.evaluate(inputs)?)
			}
		}
	}
}

fn negate_value(value: Value) -> Value {
	match value {
		Value::Float4(v) => Value::float4(-v.value()),
		Value::Float8(v) => Value::float8(-v.value()),
		Value::Int1(v) => v.checked_neg().map(Value::Int1).unwrap_or(Value::Undefined),
		Value::Int2(v) => v.checked_neg().map(Value::Int2).unwrap_or(Value::Undefined),
		Value::Int4(v) => v.checked_neg().map(Value::Int4).unwrap_or(Value::Undefined),
		Value::Int8(v) => v.checked_neg().map(Value::Int8).unwrap_or(Value::Undefined),
		Value::Int16(v) => v.checked_neg().map(Value::Int16).unwrap_or(Value::Undefined),
		_ => Value::Undefined,
	}
}

fn add_values(left: Value, right: Value) -> Result<Value> {
	let result = match (&left, &right) {
		(Value::Undefined, _) | (_, Value::Undefined) => Value::Undefined,
		(Value::Float4(a), Value::Float4(b)) => Value::float4(a.value() + b.value()),
		(Value::Float8(a), Value::Float8(b)) => Value::float8(a.value() + b.value()),
		(Value::Int1(a), Value::Int1(b)) => Value::Int1(a.wrapping_add(*b)),
		(Value::Int2(a), Value::Int2(b)) => Value::Int2(a.wrapping_add(*b)),
		(Value::Int4(a), Value::Int4(b)) => Value::Int4(a.wrapping_add(*b)),
		(Value::Int8(a), Value::Int8(b)) => Value::Int8(a.wrapping_add(*b)),
		(Value::Int16(a), Value::Int16(b)) => Value::Int16(a.wrapping_add(*b)),
		(Value::Uint1(a), Value::Uint1(b)) => Value::Uint1(a.wrapping_add(*b)),
		(Value::Uint2(a), Value::Uint2(b)) => Value::Uint2(a.wrapping_add(*b)),
		(Value::Uint4(a), Value::Uint4(b)) => Value::Uint4(a.wrapping_add(*b)),
		(Value::Uint8(a), Value::Uint8(b)) => Value::Uint8(a.wrapping_add(*b)),
		(Value::Uint16(a), Value::Uint16(b)) => Value::Uint16(a.wrapping_add(*b)),
		_ => {
			return Err(IllegalArgumentError::Precondition {
				function: "compiled value".to_string(),
				message: format!(
					"cannot add {} and {}",
					left.get_type(),
					right.get_type()
				),
			}
			.into());
		}
	};
	Ok(result)
}
