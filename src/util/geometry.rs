// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate-scaling rule between the image as
//! rendered on screen (display-space) and its original pixel resolution
//! (natural-space).

/// How much smaller the rendered image is than its natural size, as a
/// percentage: `100 * (1 - rendered / natural)`.
pub fn shrink_percent(natural_width: u32, rendered_width: f32) -> f32 {
    100.0 * (1.0 - rendered_width / natural_width as f32)
}

/// Factor taking display-space pixels back to natural-space pixels:
/// `100 / (100 - shrink_percent)`.
pub fn natural_scale(shrink_percent: f32) -> f32 {
    100.0 / (100.0 - shrink_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::BoundingBox;

    #[test]
    fn shrink_percent_for_half_size_render() {
        assert_eq!(shrink_percent(2000, 1000.0), 50.0);
    }

    #[test]
    fn shrink_percent_is_negative_when_upscaled() {
        assert_eq!(shrink_percent(500, 1000.0), -100.0);
        assert_eq!(natural_scale(-100.0), 0.5);
    }

    #[test]
    fn natural_conversion_scales_all_four_coordinates() {
        let display = BoundingBox::new(10.0, 20.0, 110.0, 120.0);
        let natural = display.scaled(natural_scale(50.0));
        assert_eq!(natural.to_array(), [20.0, 40.0, 220.0, 240.0]);
    }

    #[test]
    fn zero_shrink_is_identity() {
        let display = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(display.scaled(natural_scale(0.0)), display);
    }
}
