// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

pub mod error;
pub mod util;
pub mod value;

pub use error::{ColumnTypeError, Error, IllegalArgumentError, Result, TypeError};
pub use value::{GetType, OrderedF32, OrderedF64, Type, Value};
