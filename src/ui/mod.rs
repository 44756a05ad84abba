// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Floormark application.

pub mod canvas;
pub mod regions;
pub mod toolbar;
