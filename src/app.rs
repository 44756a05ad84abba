// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, coordinating the annotation store, the image
//! loader, and the UI panels.

use crate::io;
use crate::models::annotation::{BoundingBox, Label, ResizeHandle};
use crate::models::metrics::ImageMetrics;
use crate::models::store::AnnotationSet;
use crate::ui::{canvas, regions, toolbar};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Product switches exposed in the UI.
pub struct Settings {
    /// Write drag/resize results back into the stored bounds. When
    /// false, finished edits only log the natural-space coordinates and
    /// the exported coordinates stay as they were.
    pub persist_geometry_on_edit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            persist_geometry_on_edit: true,
        }
    }
}

/// What an in-progress drag is doing to its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMode {
    Move,
    Resize(ResizeHandle),
}

/// An in-progress move or resize. The store is untouched until the
/// gesture ends; the canvas renders `preview_bounds` in the meantime.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    pub id: u32,
    pub mode: DragMode,
    pub start_bounds: BoundingBox,
    pub delta: egui::Vec2,
}

impl DragGesture {
    /// The bounds the region would have if the gesture ended now.
    pub fn preview_bounds(&self) -> BoundingBox {
        match self.mode {
            DragMode::Move => self.start_bounds.translated(self.delta.x, self.delta.y),
            DragMode::Resize(handle) => {
                self.start_bounds.resized(handle, self.delta.x, self.delta.y)
            }
        }
    }
}

/// Result of background image loading, tagged with the load generation
/// it belongs to so stale results can be discarded.
struct LoadMessage {
    generation: u64,
    file_name: String,
    result: Result<io::media::LoadedImage, String>,
}

/// Main application state.
pub struct FloormarkApp {
    /// Single source of truth for regions and selection
    store: AnnotationSet,

    /// Product switches
    settings: Settings,

    /// Label chosen in the dropdown, consumed by Add Region
    pending_label: Option<Label>,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Intrinsic pixel size of the loaded image
    natural_size: Option<(u32, u32)>,

    /// Display metrics, frozen on the first layout after a load
    metrics: Option<ImageMetrics>,

    /// In-progress move/resize gesture
    drag: Option<DragGesture>,

    /// Generated coordinate text, kept in sync with the store
    generated_coordinates: String,

    /// Channel for background image loading
    load_tx: Sender<LoadMessage>,
    load_rx: Receiver<LoadMessage>,

    /// Monotonic upload generation; results from older loads are stale
    load_generation: u64,

    /// Loading state message
    loading_message: Option<String>,
}

impl Default for FloormarkApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FloormarkApp {
    /// Create a new Floormark application instance.
    pub fn new() -> Self {
        let (load_tx, load_rx) = channel();
        let store = AnnotationSet::new();
        let generated_coordinates = io::export::render_coordinates(&store);
        Self {
            store,
            settings: Settings::default(),
            pending_label: None,
            image_texture: None,
            natural_size: None,
            metrics: None,
            drag: None,
            generated_coordinates,
            load_tx,
            load_rx,
            load_generation: 0,
            loading_message: None,
        }
    }

    /// Re-render the coordinate text from the store. Called after every
    /// store mutation and on explicit request; both produce the same
    /// text for the same store.
    fn sync_coordinates(&mut self) {
        self.generated_coordinates = io::export::render_coordinates(&self.store);
    }

    /// Load an image file and create a texture for display
    /// (asynchronously, on a background thread).
    pub fn load_image_file(&mut self, path: std::path::PathBuf) {
        self.load_generation += 1;
        let generation = self.load_generation;
        self.loading_message = Some("Loading image...".to_string());

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sender = self.load_tx.clone();

        std::thread::spawn(move || {
            let result = io::media::load_image(&path).map_err(|e| e.to_string());
            let _ = sender.send(LoadMessage {
                generation,
                file_name,
                result,
            });
        });
    }

    /// Apply a completed background load, discarding stale results.
    fn handle_load_message(&mut self, msg: LoadMessage, ctx: &egui::Context) {
        if msg.generation != self.load_generation {
            log::debug!(
                "Discarding stale image load (generation {} < {})",
                msg.generation,
                self.load_generation
            );
            return;
        }

        self.loading_message = None;

        match msg.result {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture =
                    ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.natural_size = Some((loaded.width, loaded.height));
                // Rendered size is only valid once the image has been
                // laid out; metrics stay pending until then.
                self.metrics = None;
                self.store.image_name = msg.file_name;

                log::info!(
                    "Loaded image '{}' ({}x{})",
                    self.store.image_name,
                    loaded.width,
                    loaded.height
                );
            }
            Err(e) => {
                // Failure policy: log and keep the session going with
                // whatever was displayed before.
                log::error!("Failed to load image: {}", e);
            }
        }
    }

    /// Finish the current move/resize gesture: log the natural-space
    /// coordinates and, if persistence is on, write the display-space
    /// bounds back to the store.
    fn finish_geometry_edit(&mut self) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        let bounds = gesture.preview_bounds();

        let scale = self.metrics.map_or(1.0, |m| m.natural_scale());
        let natural = bounds.scaled(scale);
        log::info!(
            "Region {} natural-space bounds: [{:.1}, {:.1}, {:.1}, {:.1}]",
            gesture.id,
            natural.x1,
            natural.y1,
            natural.x2,
            natural.y2
        );

        if self.settings.persist_geometry_on_edit {
            self.store.apply_geometry(gesture.id, bounds);
            self.sync_coordinates();
        }
    }

    /// Start a move/resize gesture on the given region.
    fn begin_gesture(&mut self, id: u32, mode: DragMode) {
        self.store.select(id);
        if let DragMode::Resize(handle) = mode {
            self.store.grab_handle(handle);
        }
        if let Some(region) = self.store.region(id) {
            self.drag = Some(DragGesture {
                id,
                mode,
                start_bounds: region.bounds,
                delta: egui::Vec2::ZERO,
            });
        }
    }

    /// Export the coordinate records to a file chosen by extension.
    fn export_coordinates(&self, path: std::path::PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => io::export::export_yaml(&self.store, &path),
            Some("json") => io::export::export_json(&self.store, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Exported coordinates to {}", path.display()),
            Err(e) => log::error!("Failed to export coordinates: {}", e),
        }
    }
}

impl eframe::App for FloormarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image loads
        while let Ok(msg) = self.load_rx.try_recv() {
            self.handle_load_message(msg, ctx);
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
                            .pick_file()
                        {
                            self.load_image_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Export Coordinates...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .add_filter("YAML", &["yaml", "yml"])
                            .set_file_name("coordinates.json")
                            .save_file()
                        {
                            self.export_coordinates(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.pending_label, &mut self.settings)
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::AddRegion(label) => {
                self.store.add_region(label);
                self.sync_coordinates();
            }
            toolbar::ToolbarAction::GenerateCoordinates => {
                self.sync_coordinates();
            }
            toolbar::ToolbarAction::None => {}
        }

        // Region list and export text (right side)
        let regions_action = egui::SidePanel::right("regions")
            .default_width(280.0)
            .show(ctx, |ui| {
                regions::show(ui, &self.store, &self.generated_coordinates)
            })
            .inner;

        match regions_action {
            regions::RegionsAction::Select(id) => {
                self.store.select(id);
            }
            regions::RegionsAction::Remove(id) => {
                self.store.remove_region(id);
                self.sync_coordinates();
            }
            regions::RegionsAction::None => {}
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        &self.image_texture,
                        self.natural_size,
                        &self.metrics,
                        &self.store,
                        &self.drag,
                    )
                }
            })
            .inner;

        // Handle canvas actions
        match canvas_action {
            canvas::CanvasAction::ImageLaidOut {
                rendered_width,
                rendered_height,
            } => {
                if let Some(natural) = self.natural_size {
                    let metrics = ImageMetrics::new(natural, (rendered_width, rendered_height));
                    log::info!(
                        "Image laid out at {:.0}x{:.0}, shrink {:.1}%",
                        metrics.rendered_width,
                        metrics.rendered_height,
                        metrics.shrink_percent
                    );
                    self.metrics = Some(metrics);
                }
            }
            canvas::CanvasAction::SelectRegion(id) => {
                self.store.select(id);
                log::info!("Selected region {}", id);
            }
            canvas::CanvasAction::BeginMove(id) => {
                self.begin_gesture(id, DragMode::Move);
            }
            canvas::CanvasAction::BeginResize(id, handle) => {
                self.begin_gesture(id, DragMode::Resize(handle));
            }
            canvas::CanvasAction::Dragged(delta) => {
                if let Some(ref mut gesture) = self.drag {
                    gesture.delta += delta;
                }
            }
            canvas::CanvasAction::EndDrag => {
                self.finish_geometry_edit();
            }
            canvas::CanvasAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_gesture_previews_a_translated_box() {
        let gesture = DragGesture {
            id: 1,
            mode: DragMode::Move,
            start_bounds: BoundingBox::DEFAULT,
            delta: egui::vec2(15.0, -5.0),
        };
        assert_eq!(
            gesture.preview_bounds().to_array(),
            [15.0, -5.0, 115.0, 95.0]
        );
    }

    #[test]
    fn resize_gesture_previews_a_corner_move() {
        let gesture = DragGesture {
            id: 1,
            mode: DragMode::Resize(ResizeHandle::SouthEast),
            start_bounds: BoundingBox::DEFAULT,
            delta: egui::vec2(20.0, 30.0),
        };
        assert_eq!(
            gesture.preview_bounds().to_array(),
            [0.0, 0.0, 120.0, 130.0]
        );
    }

    #[test]
    fn geometry_edits_persist_by_default() {
        assert!(Settings::default().persist_geometry_on_edit);
    }

    fn decoded_message(generation: u64, file_name: &str) -> LoadMessage {
        LoadMessage {
            generation,
            file_name: file_name.to_string(),
            result: Ok(io::media::LoadedImage {
                width: 2,
                height: 2,
                pixels: vec![0; 16],
            }),
        }
    }

    #[test]
    fn stale_decode_results_are_discarded() {
        let ctx = egui::Context::default();
        let mut app = FloormarkApp::new();
        app.load_generation = 2;
        app.loading_message = Some("Loading image...".to_string());

        // A result from an older load arrives after a newer one started
        app.handle_load_message(decoded_message(1, "old.png"), &ctx);

        assert!(app.image_texture.is_none());
        assert_eq!(app.natural_size, None);
        assert_eq!(app.store.image_name, "");
        // still waiting on the current load
        assert!(app.loading_message.is_some());
    }

    #[test]
    fn current_generation_decode_result_is_applied() {
        let ctx = egui::Context::default();
        let mut app = FloormarkApp::new();
        app.load_generation = 2;
        app.loading_message = Some("Loading image...".to_string());

        app.handle_load_message(decoded_message(2, "plan.png"), &ctx);

        assert!(app.image_texture.is_some());
        assert_eq!(app.natural_size, Some((2, 2)));
        assert_eq!(app.store.image_name, "plan.png");
        // rendered size is unknown until the next layout
        assert_eq!(app.metrics, None);
        assert_eq!(app.loading_message, None);
    }

    #[test]
    fn failed_decode_keeps_the_previous_image() {
        let ctx = egui::Context::default();
        let mut app = FloormarkApp::new();
        app.load_generation = 1;
        app.handle_load_message(decoded_message(1, "plan.png"), &ctx);

        app.load_generation = 2;
        app.handle_load_message(
            LoadMessage {
                generation: 2,
                file_name: "broken.png".to_string(),
                result: Err("failed to decode".to_string()),
            },
            &ctx,
        );

        assert!(app.image_texture.is_some());
        assert_eq!(app.natural_size, Some((2, 2)));
        assert_eq!(app.store.image_name, "plan.png");
    }
}
