// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Display metrics for the loaded image.
//!
//! Regions are stored in display-space pixels; exports back to the
//! image's natural pixel space go through the shrink percentage
//! captured here.

/// Natural (intrinsic) vs rendered (on-screen) size of the loaded image.
///
/// Computed exactly once per image load, on the first frame the image is
/// laid out, and frozen until the next load. Resizing the window after
/// load does not re-measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageMetrics {
    pub natural_width: u32,
    pub natural_height: u32,
    pub rendered_width: f32,
    pub rendered_height: f32,
    /// How much smaller the rendered image is than its natural size,
    /// as a percentage. Negative if the image was scaled up.
    pub shrink_percent: f32,
}

impl ImageMetrics {
    pub fn new(natural: (u32, u32), rendered: (f32, f32)) -> Self {
        let shrink_percent = crate::util::geometry::shrink_percent(natural.0, rendered.0);
        Self {
            natural_width: natural.0,
            natural_height: natural.1,
            rendered_width: rendered.0,
            rendered_height: rendered.1,
            shrink_percent,
        }
    }

    /// Factor taking display-space coordinates back to natural-space:
    /// `100 / (100 - shrink_percent)`.
    pub fn natural_scale(&self) -> f32 {
        crate::util::geometry::natural_scale(self.shrink_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_size_render_is_fifty_percent_shrink() {
        let metrics = ImageMetrics::new((2000, 1000), (1000.0, 500.0));
        assert_eq!(metrics.shrink_percent, 50.0);
        assert_eq!(metrics.natural_scale(), 2.0);
    }

    #[test]
    fn unscaled_render_has_zero_shrink() {
        let metrics = ImageMetrics::new((800, 600), (800.0, 600.0));
        assert_eq!(metrics.shrink_percent, 0.0);
        assert_eq!(metrics.natural_scale(), 1.0);
    }
}
