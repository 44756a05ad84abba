// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Region list and export text panel.
//!
//! This module lists every region (click to select, ✕ to remove) and
//! shows the generated coordinate text in a read-only text area.

use crate::models::store::AnnotationSet;

/// Result of region panel interaction.
pub enum RegionsAction {
    None,
    Select(u32),
    Remove(u32),
}

/// Display the region list and the generated coordinates.
pub fn show(ui: &mut egui::Ui, store: &AnnotationSet, coordinates: &str) -> RegionsAction {
    let mut action = RegionsAction::None;

    ui.heading("Regions");
    ui.separator();

    if store.regions().is_empty() {
        ui.label(egui::RichText::new("No regions yet").weak());
    }

    egui::ScrollArea::vertical()
        .id_source("region_list")
        .max_height(ui.available_height() * 0.4)
        .show(ui, |ui| {
            for region in store.regions() {
                ui.horizontal(|ui| {
                    let selected = store.is_selected(region.id);
                    let row = ui.selectable_label(
                        selected,
                        format!("{} {}", region.id, region.label),
                    );
                    if row.clicked() {
                        action = RegionsAction::Select(region.id);
                    }

                    let b = region.bounds;
                    ui.label(
                        egui::RichText::new(format!(
                            "[{:.0}, {:.0}, {:.0}, {:.0}]",
                            b.x1, b.y1, b.x2, b.y2
                        ))
                        .weak()
                        .small(),
                    )
                    .on_hover_text(format!("{:.0} x {:.0} px", b.width(), b.height()));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            action = RegionsAction::Remove(region.id);
                        }
                    });
                });
            }
        });

    ui.separator();
    ui.heading("Coordinates");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("coordinate_text")
        .show(ui, |ui| {
            let mut text: &str = coordinates;
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );
        });

    action
}
