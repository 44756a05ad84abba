// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate export.
//!
//! This module projects the annotation store into {id, label, cords}
//! records and renders them as text for the export area, or writes them
//! to a JSON/YAML file.

use crate::models::annotation::Label;
use crate::models::store::AnnotationSet;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// One exported region: id, label, and the four-number bounding box
/// `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateRecord {
    pub id: u32,
    pub label: Label,
    pub cords: [f32; 4],
}

/// Project the store into export records, in list order.
pub fn coordinate_records(set: &AnnotationSet) -> Vec<CoordinateRecord> {
    set.regions()
        .iter()
        .map(|region| CoordinateRecord {
            id: region.id,
            label: region.label,
            cords: region.bounds.to_array(),
        })
        .collect()
}

/// Render the store as the pretty-printed coordinate text shown in the
/// export area. Pure: same store, same text.
pub fn render_coordinates(set: &AnnotationSet) -> String {
    // records and their order come straight from the store, so this can
    // only fail on a serializer bug; fall back to an empty list.
    serde_json::to_string_pretty(&coordinate_records(set)).unwrap_or_else(|e| {
        log::error!("Failed to render coordinates: {}", e);
        "[]".to_string()
    })
}

/// Write the coordinate records to a JSON file.
pub fn export_json(set: &AnnotationSet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&coordinate_records(set))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write the coordinate records to a YAML file.
pub fn export_yaml(set: &AnnotationSet, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(&coordinate_records(set))?;
    std::fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::BoundingBox;

    fn two_region_set() -> AnnotationSet {
        let mut set = AnnotationSet::new();
        set.add_region(Label::Pantry);
        let id = set.add_region(Label::Reception);
        set.apply_geometry(id, BoundingBox::new(10.0, 20.0, 200.0, 140.0));
        set
    }

    #[test]
    fn records_reproduce_regions_verbatim_in_order() {
        let set = two_region_set();
        let records = coordinate_records(&set);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].label, Label::Pantry);
        assert_eq!(records[0].cords, [0.0, 0.0, 100.0, 100.0]);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].label, Label::Reception);
        assert_eq!(records[1].cords, [10.0, 20.0, 200.0, 140.0]);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let set = two_region_set();
        assert_eq!(render_coordinates(&set), render_coordinates(&set));
    }

    #[test]
    fn rendered_text_uses_kebab_case_labels() {
        let set = two_region_set();
        let text = render_coordinates(&set);
        assert!(text.contains("\"pantry\""));
        assert!(text.contains("\"reception\""));
        assert!(text.contains("\"cords\""));
    }

    #[test]
    fn empty_store_renders_an_empty_list() {
        let set = AnnotationSet::new();
        assert_eq!(render_coordinates(&set), "[]");
    }

    #[test]
    fn selection_does_not_leak_into_the_export() {
        let mut set = two_region_set();
        let without_selection = render_coordinates(&set);
        set.select(1);
        assert_eq!(render_coordinates(&set), without_selection);
    }
}
