// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Element palette (left panel).
//!
//! In template mode the entries select fixed slots. In canvas mode an
//! entry adds an element when clicked and starts a drag when dragged.

use crate::models::{element::ElementKind, template::TemplateSlot};
use crate::state::{Action, EditorMode, EditorState, PlaceholderCommand};

pub fn show(ui: &mut egui::Ui, state: &EditorState) -> Action {
    let mut action = match state.mode {
        EditorMode::Template => template_entries(ui, state.template.selected),
        EditorMode::Canvas => canvas_entries(ui, state.canvas.dragging),
    };

    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new("Quick actions").small().weak());
    for command in [
        PlaceholderCommand::Save,
        PlaceholderCommand::Preview,
        PlaceholderCommand::ExportHtml,
    ] {
        let button = egui::Button::new(command.label()).min_size(egui::vec2(ui.available_width(), 0.0));
        if ui.add(button).clicked() {
            action = Action::Placeholder(command);
        }
    }

    action
}

fn template_entries(ui: &mut egui::Ui, selected: Option<TemplateSlot>) -> Action {
    let mut action = Action::None;
    ui.heading("Build elements");
    ui.add_space(4.0);
    for slot in TemplateSlot::PALETTE {
        let text = format!("{}  {}", slot.icon(), slot.label());
        let response = ui.add_sized(
            [ui.available_width(), 28.0],
            egui::SelectableLabel::new(selected == Some(slot), text),
        );
        if response.clicked() {
            action = Action::SelectSlot(slot);
        }
    }
    action
}

fn canvas_entries(ui: &mut egui::Ui, dragging: Option<ElementKind>) -> Action {
    let mut action = Action::None;
    ui.heading("Elements");
    ui.label(egui::RichText::new("Click to add, or drag onto the canvas").small().weak());
    ui.add_space(4.0);
    for kind in ElementKind::ALL {
        let text = format!("{}  {}", kind.icon(), kind.label());
        let button = egui::Button::new(text)
            .selected(dragging == Some(kind))
            .sense(egui::Sense::click_and_drag())
            .min_size(egui::vec2(ui.available_width(), 28.0));
        let response = ui.add(button);
        if response.drag_started() {
            action = Action::BeginDrag(kind);
        } else if response.clicked() {
            action = Action::AddElement(kind);
        }
        if response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
    action
}
