// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Region data structures.
//!
//! This module defines the core data structures for representing
//! labeled rectangular regions in display-space pixel coordinates.

use serde::Serialize;

/// The fixed set of region labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    OpenOffice,
    Pantry,
    Cafeteria,
    BossOffice,
    Reception,
    Washroom,
}

impl Label {
    /// All labels, in dropdown order.
    pub const ALL: [Label; 6] = [
        Label::OpenOffice,
        Label::Pantry,
        Label::Cafeteria,
        Label::BossOffice,
        Label::Reception,
        Label::Washroom,
    ];

    /// The label's wire name (kebab-case, matching the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::OpenOffice => "open-office",
            Label::Pantry => "pantry",
            Label::Cafeteria => "cafeteria",
            Label::BossOffice => "boss-office",
            Label::Reception => "reception",
            Label::Washroom => "washroom",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four corner resize handles of a selected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
    ];
}

/// An axis-aligned box `[x1, y1, x2, y2]` in display-space pixels,
/// relative to the rendered image's top-left corner.
///
/// Degenerate boxes (zero or negative extent) are representable and are
/// never rejected anywhere in the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The default box for a freshly added region: 100x100 at the
    /// overlay's top-left corner.
    pub const DEFAULT: BoundingBox = BoundingBox {
        x1: 0.0,
        y1: 0.0,
        x2: 100.0,
        y2: 100.0,
    };

    pub fn to_array(self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// The box shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// The box with the grabbed corner moved by `(dx, dy)`; the opposite
    /// corner stays put.
    pub fn resized(&self, handle: ResizeHandle, dx: f32, dy: f32) -> Self {
        let mut b = *self;
        match handle {
            ResizeHandle::NorthWest => {
                b.x1 += dx;
                b.y1 += dy;
            }
            ResizeHandle::NorthEast => {
                b.x2 += dx;
                b.y1 += dy;
            }
            ResizeHandle::SouthWest => {
                b.x1 += dx;
                b.y2 += dy;
            }
            ResizeHandle::SouthEast => {
                b.x2 += dx;
                b.y2 += dy;
            }
        }
        b
    }

    /// The box with all four coordinates multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x1 * factor,
            self.y1 * factor,
            self.x2 * factor,
            self.y2 * factor,
        )
    }

    /// Screen position of the given corner, offset by the overlay origin.
    pub fn corner(&self, handle: ResizeHandle, origin: egui::Pos2) -> egui::Pos2 {
        let (x, y) = match handle {
            ResizeHandle::NorthWest => (self.x1, self.y1),
            ResizeHandle::NorthEast => (self.x2, self.y1),
            ResizeHandle::SouthWest => (self.x1, self.y2),
            ResizeHandle::SouthEast => (self.x2, self.y2),
        };
        egui::pos2(origin.x + x, origin.y + y)
    }

    /// The box as a screen-space egui rect, offset by the overlay origin.
    pub fn to_screen_rect(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(origin.x + self.x1, origin.y + self.y1),
            egui::pos2(origin.x + self.x2, origin.y + self.y2),
        )
    }
}

/// A labeled rectangular region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: u32,
    pub label: Label,
    pub bounds: BoundingBox,
}

impl Region {
    pub fn new(id: u32, label: Label) -> Self {
        Self {
            id,
            label,
            bounds: BoundingBox::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_wire_names_are_kebab_case() {
        let names: Vec<&str> = Label::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "open-office",
                "pantry",
                "cafeteria",
                "boss-office",
                "reception",
                "washroom"
            ]
        );

        // serde uses the same names
        let json = serde_json::to_string(&Label::BossOffice).unwrap();
        assert_eq!(json, "\"boss-office\"");
    }

    #[test]
    fn resize_moves_only_the_grabbed_corner() {
        let b = BoundingBox::new(10.0, 20.0, 110.0, 120.0);

        let nw = b.resized(ResizeHandle::NorthWest, -5.0, -5.0);
        assert_eq!(nw.to_array(), [5.0, 15.0, 110.0, 120.0]);

        let se = b.resized(ResizeHandle::SouthEast, 5.0, 10.0);
        assert_eq!(se.to_array(), [10.0, 20.0, 115.0, 130.0]);

        let ne = b.resized(ResizeHandle::NorthEast, 5.0, -5.0);
        assert_eq!(ne.to_array(), [10.0, 15.0, 115.0, 120.0]);

        let sw = b.resized(ResizeHandle::SouthWest, -5.0, 10.0);
        assert_eq!(sw.to_array(), [5.0, 20.0, 110.0, 130.0]);
    }

    #[test]
    fn translate_preserves_extent() {
        let b = BoundingBox::DEFAULT.translated(30.0, 40.0);
        assert_eq!(b.to_array(), [30.0, 40.0, 130.0, 140.0]);
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 100.0);
    }

    #[test]
    fn degenerate_boxes_are_representable() {
        let b = BoundingBox::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(b.width(), 0.0);

        // resizing past the opposite corner is allowed, not clamped
        let inverted = b.resized(ResizeHandle::SouthEast, -10.0, -10.0);
        assert!(inverted.width() < 0.0);
        assert!(inverted.height() < 0.0);
    }
}
