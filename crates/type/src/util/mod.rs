// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 OnyxDB

pub mod bitvec;
pub mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
