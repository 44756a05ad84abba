// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Image display and region overlay.
//!
//! This module draws the loaded image and one translucent rectangle per
//! region on top of it, pixel-aligned with the image. The selected
//! region gets a dashed border and four corner handles for resizing, and
//! is the only one that can be dragged.

use crate::app::DragGesture;
use crate::models::annotation::{BoundingBox, ResizeHandle};
use crate::models::metrics::ImageMetrics;
use crate::models::store::AnnotationSet;

/// Fill for the selected region (translucent green, as in the overlay
/// this tool replaces).
const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 100, 40, 120);
/// Fill for unselected regions (translucent black).
const UNSELECTED_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 110);
/// Side length of a corner resize handle, in screen pixels.
const HANDLE_SIZE: f32 = 6.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// The image was laid out for the first time after a load; the
    /// rendered size is now known and the metrics can be frozen.
    ImageLaidOut {
        rendered_width: f32,
        rendered_height: f32,
    },
    SelectRegion(u32),
    BeginMove(u32),
    BeginResize(u32, ResizeHandle),
    /// Pointer moved by this much during an active move/resize.
    Dragged(egui::Vec2),
    EndDrag,
}

/// Display the image with its region overlay and handle interactions.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: &Option<egui::TextureHandle>,
    natural_size: Option<(u32, u32)>,
    metrics: &Option<ImageMetrics>,
    store: &AnnotationSet,
    drag: &Option<DragGesture>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (texture, natural) = match (image_texture, natural_size) {
            (Some(t), Some(n)) => (t, n),
            _ => {
                show_welcome(ui);
                return;
            }
        };

        let available = ui.available_size();

        // Rendered size: frozen in the metrics once the image has been
        // laid out; on the first frame after a load, fit to the
        // available space and report it so the metrics can be captured.
        let (display_width, display_height) = match metrics {
            Some(m) => (m.rendered_width, m.rendered_height),
            None => {
                let (w, h) = fit_to_available(natural, available);
                action = CanvasAction::ImageLaidOut {
                    rendered_width: w,
                    rendered_height: h,
                };
                (w, h)
            }
        };

        // Center the image
        let x_offset = (available.x - display_width) / 2.0;
        let y_offset = (available.y - display_height) / 2.0;

        let image_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width, display_height),
        );

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Region bounds are display-space, relative to the image's
        // top-left corner.
        let origin = image_rect.min;

        for region in store.regions() {
            let is_selected = store.is_selected(region.id);

            // During an active gesture the store is untouched; render
            // the in-progress bounds instead.
            let bounds = match drag {
                Some(g) if g.id == region.id => g.preview_bounds(),
                _ => region.bounds,
            };

            let screen_rect = bounds.to_screen_rect(origin);
            let fill = if is_selected { SELECTED_FILL } else { UNSELECTED_FILL };
            ui.painter().rect_filled(screen_rect, 0.0, fill);

            let response = ui.interact(
                screen_rect,
                ui.id().with(("region", region.id)),
                egui::Sense::click_and_drag(),
            );

            if response.clicked() {
                action = CanvasAction::SelectRegion(region.id);
            }

            // Only the selected region is draggable.
            if is_selected {
                let response = response.on_hover_cursor(egui::CursorIcon::Grab);
                if response.drag_started() {
                    action = CanvasAction::BeginMove(region.id);
                } else if response.dragged() {
                    action = CanvasAction::Dragged(response.drag_delta());
                } else if response.drag_stopped() {
                    action = CanvasAction::EndDrag;
                }

                draw_selection_border(ui.painter(), screen_rect);

                // Corner handles, interacted after the body so they win
                // where they overlap it.
                for handle in ResizeHandle::ALL {
                    if let Some(handle_action) =
                        show_handle(ui, region.id, &bounds, handle, origin)
                    {
                        action = handle_action;
                    }
                }
            }
        }
    });

    // Status line: rendered vs natural dimensions and shrink percentage.
    ui.separator();
    ui.horizontal(|ui| {
        match (metrics, natural_size) {
            (Some(m), _) => {
                ui.label(format!(
                    "Rendered: {:.0} x {:.0}",
                    m.rendered_width, m.rendered_height
                ));
                ui.separator();
                ui.label(format!(
                    "Natural: {} x {}",
                    m.natural_width, m.natural_height
                ));
                ui.separator();
                ui.label(format!("Shrink: {:.1}%", m.shrink_percent));
            }
            (None, Some(_)) => {
                ui.label("Measuring image...");
            }
            (None, None) => {
                ui.label("No image loaded");
            }
        }
    });

    action
}

/// Fit the image into the available space, preserving aspect ratio.
fn fit_to_available(natural: (u32, u32), available: egui::Vec2) -> (f32, f32) {
    let img_aspect = natural.0 as f32 / natural.1 as f32;
    let available_aspect = available.x / available.y;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        let width = available.x;
        (width, width / img_aspect)
    } else {
        // Image is taller - fit to height
        let height = available.y;
        (height * img_aspect, height)
    }
}

/// Dashed border around the selected region.
fn draw_selection_border(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(pair, stroke, 6.0, 2.0));
    }
}

/// Draw one corner handle and report any interaction with it.
fn show_handle(
    ui: &mut egui::Ui,
    region_id: u32,
    bounds: &BoundingBox,
    handle: ResizeHandle,
    origin: egui::Pos2,
) -> Option<CanvasAction> {
    let center = bounds.corner(handle, origin);
    let rect = egui::Rect::from_center_size(center, egui::vec2(HANDLE_SIZE, HANDLE_SIZE));

    ui.painter().rect_filled(rect, 1.0, egui::Color32::WHITE);
    ui.painter().rect_stroke(
        rect,
        1.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
    );

    let response = ui
        .interact(
            // Slightly larger hit area than the drawn handle.
            rect.expand(2.0),
            ui.id().with(("handle", region_id, handle as u8)),
            egui::Sense::drag(),
        )
        .on_hover_cursor(match handle {
            ResizeHandle::NorthWest | ResizeHandle::SouthEast => egui::CursorIcon::ResizeNwSe,
            ResizeHandle::NorthEast | ResizeHandle::SouthWest => egui::CursorIcon::ResizeNeSw,
        });

    if response.drag_started() {
        Some(CanvasAction::BeginResize(region_id, handle))
    } else if response.dragged() {
        Some(CanvasAction::Dragged(response.drag_delta()))
    } else if response.drag_stopped() {
        Some(CanvasAction::EndDrag)
    } else {
        None
    }
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Floormark")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Label rectangular regions on an image")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open an image to begin")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
