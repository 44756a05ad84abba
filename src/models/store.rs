// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The annotation store.
//!
//! This module holds the ordered list of labeled regions together with
//! the current selection. It is the single source of truth: the overlay
//! renderer reflects it and the coordinate exporter projects from it.

use super::annotation::{BoundingBox, Label, Region, ResizeHandle};

/// The current selection: at most one region, optionally with an active
/// resize handle. Modeling this as a single nullable field on the store
/// makes the single-selection invariant structural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub id: u32,
    pub handle: Option<ResizeHandle>,
}

/// Ordered set of labeled regions for the current session.
#[derive(Debug, Clone)]
pub struct AnnotationSet {
    /// Name of the image the regions belong to.
    pub image_name: String,
    regions: Vec<Region>,
    selection: Option<Selection>,
    /// Next id to hand out. Ids are never reused or renumbered, so gaps
    /// appear after removals; export consumers must treat ids as opaque.
    next_id: u32,
}

impl Default for AnnotationSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self {
            image_name: String::new(),
            regions: Vec::new(),
            selection: None,
            next_id: 1,
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selection.map_or(false, |s| s.id == id)
    }

    pub fn region(&self, id: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Append a new region with the default bounds, unselected.
    /// Returns the assigned id.
    pub fn add_region(&mut self, label: Label) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.regions.push(Region::new(id, label));
        log::info!("Added region {} ({}), total: {}", id, label, self.regions.len());
        id
    }

    /// Remove the region with the given id. No-op if the id is unknown.
    /// Removing the selected region clears the selection.
    pub fn remove_region(&mut self, id: u32) {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != id);
        if self.regions.len() == before {
            return;
        }
        if self.is_selected(id) {
            self.selection = None;
        }
        log::info!("Removed region {}, total: {}", id, self.regions.len());
    }

    /// Select the region with the given id, clearing any previous
    /// selection and its handle. No-op if the id is unknown.
    pub fn select(&mut self, id: u32) {
        if self.region(id).is_some() {
            self.selection = Some(Selection { id, handle: None });
        }
    }

    /// Attach a resize handle to the current selection, if any.
    pub fn grab_handle(&mut self, handle: ResizeHandle) {
        if let Some(ref mut sel) = self.selection {
            sel.handle = Some(handle);
        }
    }

    /// Overwrite a region's display-space bounds after a drag or resize.
    /// No-op if the id is unknown.
    pub fn apply_geometry(&mut self, id: u32, bounds: BoundingBox) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            region.bounds = bounds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_region_gets_id_one_with_default_bounds() {
        let mut set = AnnotationSet::new();
        let id = set.add_region(Label::Pantry);
        assert_eq!(id, 1);
        assert_eq!(set.regions().len(), 1);

        let region = &set.regions()[0];
        assert_eq!(region.label, Label::Pantry);
        assert_eq!(region.bounds.to_array(), [0.0, 0.0, 100.0, 100.0]);
        assert!(!set.is_selected(region.id));
    }

    #[test]
    fn removal_keeps_remaining_ids_unchanged() {
        let mut set = AnnotationSet::new();
        set.add_region(Label::OpenOffice);
        set.add_region(Label::Pantry);
        set.add_region(Label::Washroom);

        set.remove_region(2);

        let ids: Vec<u32> = set.regions().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn ids_are_never_reused_after_removals() {
        let mut set = AnnotationSet::new();
        set.add_region(Label::OpenOffice);
        set.add_region(Label::Pantry);
        set.add_region(Label::Washroom);
        set.remove_region(1);

        let id = set.add_region(Label::Reception);
        assert_eq!(id, 4);

        let mut ids: Vec<u32> = set.regions().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.regions().len());
    }

    #[test]
    fn selecting_another_region_clears_previous_selection_and_handle() {
        let mut set = AnnotationSet::new();
        set.add_region(Label::OpenOffice);
        set.add_region(Label::Pantry);

        set.select(1);
        set.grab_handle(ResizeHandle::SouthEast);
        assert_eq!(
            set.selection(),
            Some(Selection {
                id: 1,
                handle: Some(ResizeHandle::SouthEast)
            })
        );

        set.select(2);
        assert!(set.is_selected(2));
        assert!(!set.is_selected(1));
        assert_eq!(set.selection().unwrap().handle, None);
    }

    #[test]
    fn removing_selected_region_clears_selection() {
        let mut set = AnnotationSet::new();
        set.add_region(Label::Cafeteria);
        set.select(1);
        set.remove_region(1);
        assert_eq!(set.selection(), None);
    }

    #[test]
    fn missing_ids_are_silent_noops() {
        let mut set = AnnotationSet::new();
        set.add_region(Label::BossOffice);

        set.remove_region(99);
        assert_eq!(set.regions().len(), 1);

        set.select(99);
        assert_eq!(set.selection(), None);

        set.apply_geometry(99, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(set.regions()[0].bounds, BoundingBox::DEFAULT);
    }

    #[test]
    fn apply_geometry_overwrites_bounds() {
        let mut set = AnnotationSet::new();
        let id = set.add_region(Label::Reception);
        let bounds = BoundingBox::new(10.0, 20.0, 200.0, 140.0);
        set.apply_geometry(id, bounds);
        assert_eq!(set.region(id).unwrap().bounds, bounds);
    }
}
