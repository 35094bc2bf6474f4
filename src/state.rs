// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application state and the action dispatcher.
//!
//! UI components read `EditorState` and return an `Action`; only
//! `EditorState::dispatch` mutates the state.

use crate::models::{
    canvas::{CanvasDocument, ElementEdit},
    element::{ElementId, ElementKind},
    template::{TemplateDocument, TemplateEdit, TemplateSlot},
};
use crate::util::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which editor is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Template,
    Canvas,
}

impl EditorMode {
    pub fn label(self) -> &'static str {
        match self {
            EditorMode::Template => "Template",
            EditorMode::Canvas => "Canvas",
        }
    }
}

/// Toolbar commands that exist in the UI but have no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderCommand {
    Save,
    Preview,
    ExportHtml,
    MobilePreview,
}

impl PlaceholderCommand {
    pub fn label(self) -> &'static str {
        match self {
            PlaceholderCommand::Save => "💾 Save",
            PlaceholderCommand::Preview => "👁 Preview",
            PlaceholderCommand::ExportHtml => "⬇ Export HTML",
            PlaceholderCommand::MobilePreview => "📱 Mobile version",
        }
    }
}

/// Every state change the UI can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    SetMode(EditorMode),
    SelectSlot(TemplateSlot),
    EditTemplate(TemplateEdit),
    BeginDrag(ElementKind),
    CancelDrag,
    Drop { pointer: Point, canvas_origin: Point },
    AddElement(ElementKind),
    SelectElement(ElementId),
    /// Clears the selection of the active mode.
    ClearSelection,
    EditElement(ElementEdit),
    DeleteSelected,
    Placeholder(PlaceholderCommand),
}

/// Complete editor state.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub mode: EditorMode,
    pub template: TemplateDocument,
    pub canvas: CanvasDocument,
}

impl EditorState {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            mode,
            template: TemplateDocument::default(),
            canvas: CanvasDocument::new(),
        }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SetMode(mode) => {
                if self.mode != mode {
                    self.mode = mode;
                    self.canvas.cancel_drag();
                    log::info!("Switched to {} mode", mode.label());
                }
            }
            Action::SelectSlot(slot) => {
                self.template.select(slot);
                log::debug!("Selected slot {:?}", slot);
            }
            Action::EditTemplate(edit) => {
                log::debug!("Template edit {:?}", edit);
                self.template.data.apply(edit);
            }
            Action::BeginDrag(kind) => {
                self.canvas.begin_drag(kind);
                log::debug!("Dragging {}", kind);
            }
            Action::CancelDrag => {
                if let Some(kind) = self.canvas.dragging {
                    log::debug!("Drag of {} released outside the canvas", kind);
                }
                self.canvas.cancel_drag();
            }
            Action::Drop {
                pointer,
                canvas_origin,
            } => match self.canvas.drop_at(pointer, canvas_origin) {
                Some(id) => log::info!("Dropped {}, total: {}", id, self.canvas.len()),
                None => log::debug!("Ignored drop with no drag in progress"),
            },
            Action::AddElement(kind) => {
                let position = self.canvas.next_insert_position();
                let id = self.canvas.insert(kind, position);
                log::info!("Added {}, total: {}", id, self.canvas.len());
            }
            Action::SelectElement(id) => {
                if self.canvas.select(&id) {
                    log::debug!("Selected element {}", id);
                } else {
                    log::debug!("Ignored selection of unknown element {}", id);
                }
            }
            Action::ClearSelection => match self.mode {
                EditorMode::Template => self.template.clear_selection(),
                EditorMode::Canvas => self.canvas.clear_selection(),
            },
            Action::EditElement(edit) => {
                let description = format!("{:?}", edit);
                if self.canvas.edit_selected(edit) {
                    log::debug!("Element edit {}", description);
                } else {
                    log::debug!("Ignored element edit {}", description);
                }
            }
            Action::DeleteSelected => {
                if self.mode != EditorMode::Canvas {
                    return;
                }
                if let Some(element) = self.canvas.delete_selected() {
                    log::info!("Deleted {}, total: {}", element.id, self.canvas.len());
                }
            }
            Action::Placeholder(command) => {
                log::info!("{:?} is not available in this version", command);
            }
        }
    }
}
