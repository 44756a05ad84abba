// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Label picker and region actions toolbar.
//!
//! This module provides the strip with the label dropdown, the Add
//! Region button (disabled until a label is chosen), and the explicit
//! Generate Coordinates button.

use crate::app::Settings;
use crate::models::annotation::Label;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    AddRegion(Label),
    GenerateCoordinates,
}

/// Display the toolbar. The pending label is cleared when a region is
/// added.
pub fn show(
    ui: &mut egui::Ui,
    pending_label: &mut Option<Label>,
    settings: &mut Settings,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Label:");

        egui::ComboBox::from_id_source("pending_label")
            .selected_text(
                pending_label.map_or("Choose a label from here....", |l| l.as_str()),
            )
            .show_ui(ui, |ui| {
                for label in Label::ALL {
                    ui.selectable_value(pending_label, Some(label), label.as_str());
                }
            });

        // Empty label never adds a region; the button is disabled and
        // the action carries the label by value.
        let add = ui.add_enabled(pending_label.is_some(), egui::Button::new("Add Region"));
        if add.clicked() {
            if let Some(label) = pending_label.take() {
                action = ToolbarAction::AddRegion(label);
            }
        }

        ui.separator();

        if ui.button("Generate Coordinates").clicked() {
            action = ToolbarAction::GenerateCoordinates;
        }

        ui.separator();

        ui.checkbox(
            &mut settings.persist_geometry_on_edit,
            "Apply edits to coordinates",
        )
        .on_hover_text(
            "When off, dragging or resizing a region logs the natural-space \
             coordinates but leaves the exported coordinates unchanged",
        );
    });

    action
}
