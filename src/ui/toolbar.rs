// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and editor mode selection.
//!
//! This module provides the toolbar interface for switching between the
//! template and canvas editors, plus the page-level commands.

use crate::state::{Action, EditorMode, EditorState, PlaceholderCommand};

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, state: &EditorState) -> Action {
    let mut action = Action::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(egui::RichText::new("Build editor").strong());

        ui.separator();

        for mode in [EditorMode::Template, EditorMode::Canvas] {
            if ui.selectable_label(state.mode == mode, mode.label()).clicked() {
                action = Action::SetMode(mode);
            }
        }

        ui.separator();

        let mode_text = match state.mode {
            EditorMode::Template => "Click a block in the preview or pick one on the left",
            EditorMode::Canvas => "Drag elements onto the canvas, click one to edit it",
        };
        ui.label(egui::RichText::new(mode_text).italics().weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let command = PlaceholderCommand::MobilePreview;
            if ui.button(command.label()).clicked() {
                action = Action::Placeholder(command);
            }
            ui.label(
                egui::RichText::new("Editing")
                    .small()
                    .background_color(ui.visuals().faint_bg_color),
            );
        });
    });

    action
}
