// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

mod clamp;
mod negate;
mod plus;

pub use clamp::Clamp;
pub use negate::Negate;
pub use plus::Plus;

use onyxdb_type::Type;

pub(crate) fn numeric_types() -> Vec<Type> {
	vec![
		Type::Float4,
		Type::Float8,
		Type::Int1,
		Type::Int2,
		Type::Int4,
		Type::Int8,
		Type::Int16,
		Type::Uint1,
		Type::Uint2,
		Type::Uint4,
		Type::Uint8,
		Type::Uint16,
	]
}

pub(crate) fn signed_types() -> Vec<Type> {
	vec![Type::Float4, Type::Float8, Type::Int1, Type::Int2, Type::Int4, Type::Int8, Type::Int16]
}
