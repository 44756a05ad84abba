// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: image decoding and coordinate export.

pub mod export;
pub mod media;
