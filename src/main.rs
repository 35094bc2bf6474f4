// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Build Editor
//!
//! A desktop editor for game build landing pages: fill in a fixed page
//! template, or compose a page freely by dropping elements on a canvas.

mod app;
mod config;
mod models;
mod render;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::BuildEditorApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Ignoring config: {:#}", e);
        AppConfig::default()
    });
    let mode = config.mode();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([900.0, 600.0])
            .with_title("Build Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Build Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(BuildEditorApp::new(mode)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
