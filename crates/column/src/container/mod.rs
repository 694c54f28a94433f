// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

mod any;
mod bool;
mod number;
mod undefined;
mod utf8;

pub use any::AnyContainer;
pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use undefined::UndefinedContainer;
pub use utf8::Utf8Container;
