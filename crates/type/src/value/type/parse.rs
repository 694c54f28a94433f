// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

use crate::{
	error::{Result, TypeError},
	value::r#type::Type,
};

impl Type {
	/// Parse a textual type name. Names are matched case-insensitively;
	/// unknown or malformed names fail with a type error.
	pub fn parse(name: &str) -> Result<Type> {
		let normalized = name.trim().to_ascii_lowercase();
		let result = match normalized.as_str() {
			"undefined" => Type::Undefined,
			"bool" | "boolean" => Type::Boolean,
			"float4" => Type::Float4,
			"float8" => Type::Float8,
			"int1" => Type::Int1,
			"int2" => Type::Int2,
			"int4" => Type::Int4,
			"int8" => Type::Int8,
			"int16" => Type::Int16,
			"uint1" => Type::Uint1,
			"uint2" => Type::Uint2,
			"uint4" => Type::Uint4,
			"uint8" => Type::Uint8,
			"uint16" => Type::Uint16,
			"utf8" | "text" => Type::Utf8,
			"any" => Type::Any,
			_ => {
				return Err(TypeError::UnknownType {
					name: name.to_string(),
				}
				.into());
			}
		};
		Ok(result)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_parse_canonical_names() {
		assert_eq!(Type::parse("Int4").unwrap(), Type::Int4);
		assert_eq!(Type::parse("Utf8").unwrap(), Type::Utf8);
		assert_eq!(Type::parse("Float8").unwrap(), Type::Float8);
		assert_eq!(Type::parse("Uint16").unwrap(), Type::Uint16);
	}

	#[test]
	fn test_parse_aliases_and_case() {
		assert_eq!(Type::parse("bool").unwrap(), Type::Boolean);
		assert_eq!(Type::parse("BOOLEAN").unwrap(), Type::Boolean);
		assert_eq!(Type::parse("text").unwrap(), Type::Utf8);
		assert_eq!(Type::parse("  int8  ").unwrap(), Type::Int8);
	}

	#[test]
	fn test_parse_unknown_name() {
		let err = Type::parse("NotARealType").unwrap_err();
		assert_eq!(
			err,
			TypeError::UnknownType {
				name: "NotARealType".to_string()
			}
			.into()
		);
	}

	#[test]
	fn test_round_trip_every_name() {
		for ty in [
			Type::Undefined,
			Type::Boolean,
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
			Type::Utf8,
			Type::Any,
		] {
			assert_eq!(Type::parse(ty.name()).unwrap(), ty);
		}
	}
}
