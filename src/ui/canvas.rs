// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview area for both editors.
//!
//! Paints the preview tree of the active mode, turns clicks into
//! selections and palette drags released over the area into drops.

use super::paint::{from_egui_rect, paint, to_point};
use crate::render::{self, hit_test, HitTarget};
use crate::state::{Action, EditorMode, EditorState};

const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Display the preview area and handle mouse interactions.
pub fn show(ui: &mut egui::Ui, state: &EditorState) -> Action {
    let mut action = Action::None;

    let size = ui.available_size() - egui::vec2(0.0, STATUS_BAR_HEIGHT);
    let (response, painter) = ui.allocate_painter(size.max(egui::Vec2::ZERO), egui::Sense::click());
    let viewport = from_egui_rect(response.rect);

    let tree = match state.mode {
        EditorMode::Template => {
            render::template::render(&state.template.data, state.template.selected, viewport)
        }
        EditorMode::Canvas => render::canvas::render(&state.canvas, viewport),
    };
    paint(&painter, &tree, 1.0);

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            // Empty areas leave the selection alone.
            match hit_test(&tree, to_point(pos)) {
                Some(HitTarget::Slot(slot)) => action = Action::SelectSlot(*slot),
                Some(HitTarget::Element(id)) => action = Action::SelectElement(id.clone()),
                None => {}
            }
        }
    }

    if let Some(kind) = state.canvas.dragging {
        let (released, pointer) =
            ui.input(|i| (i.pointer.any_released(), i.pointer.hover_pos()));

        if let Some(pos) = pointer {
            let ghost = ui.ctx().layer_painter(egui::LayerId::new(
                egui::Order::Tooltip,
                egui::Id::new("palette_drag_ghost"),
            ));
            ghost.text(
                pos + egui::vec2(14.0, 14.0),
                egui::Align2::LEFT_TOP,
                format!("{} {}", kind.icon(), kind.label()),
                egui::FontId::proportional(14.0),
                ui.visuals().strong_text_color(),
            );
        }

        if released {
            action = match pointer {
                Some(pos) if state.mode == EditorMode::Canvas && response.rect.contains(pos) => {
                    Action::Drop {
                        pointer: to_point(pos),
                        canvas_origin: viewport.min,
                    }
                }
                _ => Action::CancelDrag,
            };
        }
    }

    status_bar(ui, state);

    action
}

fn status_bar(ui: &mut egui::Ui, state: &EditorState) {
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Mode: {}", state.mode.label()));
        ui.separator();
        match state.mode {
            EditorMode::Template => match state.template.selected {
                Some(slot) => ui.label(format!("Selected: {}", slot.label())),
                None => ui.label("Nothing selected"),
            },
            EditorMode::Canvas => {
                ui.label(format!("{} elements", state.canvas.len()));
                ui.separator();
                match &state.canvas.selected {
                    Some(id) => ui.label(format!("Selected: {}", id)),
                    None => ui.label("Nothing selected"),
                }
            }
        };
    });
}
