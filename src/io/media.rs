// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files into raw RGBA pixels suitable for
//! uploading as an egui texture.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded image: dimensions plus tightly packed RGBA8 pixels.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
