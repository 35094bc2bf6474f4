// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application and egui App implementation.
//!
//! The application owns the single `EditorState`. Each frame the panels
//! draw from an immutable view of it and hand back actions, which are
//! dispatched after all panels have been drawn.

use crate::state::{Action, EditorMode, EditorState, PlaceholderCommand};
use crate::ui::{canvas, palette, properties, toolbar};

/// Main application state.
pub struct BuildEditorApp {
    state: EditorState,
}

impl Default for BuildEditorApp {
    fn default() -> Self {
        Self::new(EditorMode::default())
    }
}

impl BuildEditorApp {
    /// Create a new editor starting in `mode`.
    pub fn new(mode: EditorMode) -> Self {
        log::info!("Starting in {} mode", mode.label());
        Self {
            state: EditorState::new(mode),
        }
    }

    fn menu_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                for command in [PlaceholderCommand::Save, PlaceholderCommand::ExportHtml] {
                    if ui.button(command.label()).clicked() {
                        actions.push(Action::Placeholder(command));
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_delete = self.state.mode == EditorMode::Canvas
                    && self.state.canvas.selected_element().is_some();
                if ui
                    .add_enabled(can_delete, egui::Button::new("Delete Selected (Del)"))
                    .clicked()
                {
                    actions.push(Action::DeleteSelected);
                    ui.close_menu();
                }
                if ui.button("Clear Selection (Esc)").clicked() {
                    actions.push(Action::ClearSelection);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                for mode in [EditorMode::Template, EditorMode::Canvas] {
                    if ui
                        .radio(self.state.mode == mode, format!("{} editor", mode.label()))
                        .clicked()
                    {
                        actions.push(Action::SetMode(mode));
                        ui.close_menu();
                    }
                }
                ui.separator();
                for command in [PlaceholderCommand::Preview, PlaceholderCommand::MobilePreview] {
                    if ui.button(command.label()).clicked() {
                        actions.push(Action::Placeholder(command));
                        ui.close_menu();
                    }
                }
            });
        });
    }

    fn keyboard_actions(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.state.canvas.dragging.is_some() {
                actions.push(Action::CancelDrag);
            } else {
                actions.push(Action::ClearSelection);
            }
        }

        // Delete/Backspace must not fire while a text field is being edited
        if !ctx.wants_keyboard_input()
            && ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace))
        {
            actions.push(Action::DeleteSelected);
        }
    }
}

impl eframe::App for BuildEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ui, &mut actions);
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &self.state))
            .inner;
        actions.push(toolbar_action);

        // Element palette (left side)
        let palette_action = egui::SidePanel::left("palette")
            .default_width(220.0)
            .show(ctx, |ui| palette::show(ui, &self.state))
            .inner;
        actions.push(palette_action);

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| properties::show(ui, &self.state))
                    .inner
            })
            .inner;
        actions.push(properties_action);

        // Preview (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::show(ui, &self.state))
            .inner;
        actions.push(canvas_action);

        self.keyboard_actions(ctx, &mut actions);

        for action in actions {
            self.state.dispatch(action);
        }
    }
}
