// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: regions, the annotation store, and image metrics.

pub mod annotation;
pub mod metrics;
pub mod store;
