// Copyright (c) 2026, Floormark Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Floormark
//!
//! A desktop tool for drawing labeled rectangular regions over an image
//! and exporting their pixel coordinates as structured text.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FloormarkApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Floormark - Image Region Labeler"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Floormark",
        options,
        Box::new(|_cc| Ok(Box::new(FloormarkApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
