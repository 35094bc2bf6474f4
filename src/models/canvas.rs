// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freeform canvas document.
//!
//! Holds the insertion-ordered element list, the current selection and
//! the kind being dragged from the palette. The selection is kept as an
//! identifier into the list, never as a separate copy of the element.

use super::element::{Element, ElementId, ElementKind, StyleValue};
use crate::util::geometry::{to_canvas_coordinates, Point, Size};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single-field edit of the selected element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementEdit {
    Content(String),
    Position(Point),
    Size(Size),
    Style(StyleValue),
}

/// The freeform canvas state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub elements: Vec<Element>,
    pub selected: Option<ElementId>,
    #[serde(skip)]
    pub dragging: Option<ElementKind>,
}

impl CanvasDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.element(id))
    }

    fn selected_element_mut(&mut self) -> Option<&mut Element> {
        let id = self.selected.as_ref()?;
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Record the kind being dragged from the palette.
    pub fn begin_drag(&mut self, kind: ElementKind) {
        self.dragging = Some(kind);
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Place the dragged kind at the pointer, translated into canvas
    /// coordinates. Returns `None` when no drag is in progress.
    pub fn drop_at(&mut self, pointer: Point, canvas_origin: Point) -> Option<ElementId> {
        let kind = self.dragging.take()?;
        let position = to_canvas_coordinates(pointer, canvas_origin);
        Some(self.insert(kind, position))
    }

    /// Append a new element of `kind` at `position` and select it.
    pub fn insert(&mut self, kind: ElementKind, position: Point) -> ElementId {
        let id = self.unique_id(kind, current_millis());
        self.elements.push(Element::new(id.clone(), kind, position));
        self.selected = Some(id.clone());
        id
    }

    /// Position used when an element is added by clicking the palette.
    pub fn next_insert_position(&self) -> Point {
        let step = (self.elements.len() % 10) as f32 * 20.0;
        Point::new(40.0 + step, 40.0 + step)
    }

    fn unique_id(&self, kind: ElementKind, millis: u128) -> ElementId {
        let base = ElementId::generate(kind, millis);
        let mut candidate = base.clone();
        let mut n = 0;
        while self.element(&candidate).is_some() {
            n += 1;
            candidate = base.with_suffix(n);
        }
        candidate
    }

    /// Select an existing element. Unknown identifiers are ignored.
    pub fn select(&mut self, id: &ElementId) -> bool {
        if self.element(id).is_some() {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace one field of the selected element. Returns false when there
    /// is no selection or the style key does not apply to the element.
    pub fn edit_selected(&mut self, edit: ElementEdit) -> bool {
        let Some(element) = self.selected_element_mut() else {
            return false;
        };
        match edit {
            ElementEdit::Content(content) => element.content = content,
            ElementEdit::Position(position) => element.position = position,
            ElementEdit::Size(size) => element.size = size,
            ElementEdit::Style(value) => return element.style.apply(value),
        }
        true
    }

    /// Remove the selected element and clear the selection.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let id = self.selected.take()?;
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }
}

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::Rgb;
    use crate::models::element::{ElementStyle, FontWeight};

    fn document_with(kinds: &[ElementKind]) -> CanvasDocument {
        let mut doc = CanvasDocument::new();
        for (i, kind) in kinds.iter().enumerate() {
            doc.insert(*kind, Point::new(i as f32 * 10.0, 0.0));
        }
        doc
    }

    #[test]
    fn test_drop_button_creates_default_element() {
        let mut doc = CanvasDocument::new();
        doc.begin_drag(ElementKind::Button);
        let id = doc
            .drop_at(Point::new(364.0, 122.0), Point::new(264.0, 72.0))
            .unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.selected.as_ref(), Some(&id));
        assert_eq!(doc.dragging, None);

        let element = doc.selected_element().unwrap();
        assert_eq!(element.kind(), ElementKind::Button);
        assert_eq!(element.position, Point::new(100.0, 50.0));
        assert_eq!(element.size, Size::new(120.0, 40.0));
        assert_eq!(
            element.style,
            ElementStyle::Button {
                background_color: Rgb::from_hex("#6E48EB").unwrap()
            }
        );
        assert!(id.as_str().starts_with("button-"));
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let mut doc = document_with(&[ElementKind::Text]);
        let before = doc.elements.clone();
        assert_eq!(doc.drop_at(Point::new(10.0, 10.0), Point::new(0.0, 0.0)), None);
        assert_eq!(doc.elements, before);
    }

    #[test]
    fn test_drop_outside_canvas_is_kept() {
        let mut doc = CanvasDocument::new();
        doc.begin_drag(ElementKind::Image);
        doc.drop_at(Point::new(-50.0, 10.0), Point::new(200.0, 100.0));
        assert_eq!(doc.elements[0].position, Point::new(-250.0, -90.0));
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let mut doc = CanvasDocument::new();
        let a = doc.unique_id(ElementKind::Text, 5);
        doc.elements.push(Element::new(a.clone(), ElementKind::Text, Point::default()));
        let b = doc.unique_id(ElementKind::Text, 5);
        doc.elements.push(Element::new(b.clone(), ElementKind::Text, Point::default()));
        let c = doc.unique_id(ElementKind::Text, 5);

        assert_eq!(a.as_str(), "text-5");
        assert_eq!(b.as_str(), "text-5-1");
        assert_eq!(c.as_str(), "text-5-2");
    }

    #[test]
    fn test_delete_selected_removes_only_that_entry() {
        let mut doc = document_with(&[ElementKind::Text, ElementKind::Button, ElementKind::Video]);
        let middle = doc.elements[1].id.clone();
        assert!(doc.select(&middle));

        let removed = doc.delete_selected().unwrap();
        assert_eq!(removed.id, middle);
        assert_eq!(doc.len(), 2);
        assert!(doc.element(&middle).is_none());
        assert_eq!(doc.selected, None);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut doc = document_with(&[ElementKind::Text]);
        doc.clear_selection();
        assert!(doc.delete_selected().is_none());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_edit_changes_exactly_one_field() {
        let mut doc = document_with(&[ElementKind::Text]);
        let before = doc.elements[0].clone();

        assert!(doc.edit_selected(ElementEdit::Style(StyleValue::FontWeight(FontWeight::Bold))));
        let after = doc.elements[0].clone();
        assert_eq!(after.content, before.content);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(
            after.style,
            ElementStyle::Text {
                font_size: 16.0,
                color: Rgb::WHITE,
                font_weight: FontWeight::Bold,
            }
        );

        assert!(doc.edit_selected(ElementEdit::Content("Hello".to_string())));
        assert_eq!(doc.elements[0].content, "Hello");
        assert_eq!(doc.elements[0].style, after.style);
    }

    #[test]
    fn test_geometry_edits_leave_other_fields() {
        let id = ElementId::generate(ElementKind::Button, 1);
        let original = Element::new(id.clone(), ElementKind::Button, Point::new(0.0, 0.0));
        let cases = [
            (
                ElementEdit::Position(Point::new(15.0, 25.0)),
                Element {
                    position: Point::new(15.0, 25.0),
                    ..original.clone()
                },
            ),
            (
                ElementEdit::Size(Size::new(200.0, 60.0)),
                Element {
                    size: Size::new(200.0, 60.0),
                    ..original.clone()
                },
            ),
        ];

        for (edit, expected) in cases {
            let mut doc = CanvasDocument::new();
            doc.elements.push(original.clone());
            assert!(doc.select(&id));

            assert!(doc.edit_selected(edit.clone()), "{:?}", edit);
            assert_eq!(doc.elements, vec![expected], "{:?}", edit);
            assert_eq!(doc.selected.as_ref(), Some(&id));
        }
    }

    #[test]
    fn test_edit_without_selection_is_ignored() {
        let mut doc = document_with(&[ElementKind::Image]);
        doc.clear_selection();
        assert!(!doc.edit_selected(ElementEdit::Style(StyleValue::Opacity(0.1))));
        assert_eq!(doc.elements[0].style, ElementKind::Image.default_style());
    }

    #[test]
    fn test_opacity_roundtrip_through_document() {
        let mut doc = document_with(&[ElementKind::Image]);
        assert!(doc.edit_selected(ElementEdit::Style(StyleValue::Opacity(0.42))));
        let element = doc.selected_element().unwrap();
        assert_eq!(
            element.style.get(crate::models::element::StyleKey::Opacity),
            Some(StyleValue::Opacity(0.42))
        );
    }

    #[test]
    fn test_switching_selection_keeps_previous_element_data() {
        let mut doc = document_with(&[ElementKind::Text, ElementKind::Button]);
        let a = doc.elements[0].id.clone();
        let b = doc.elements[1].id.clone();

        doc.select(&a);
        doc.edit_selected(ElementEdit::Style(StyleValue::FontSize(30.0)));
        let a_snapshot = doc.element(&a).cloned();

        doc.select(&b);
        assert_eq!(doc.selected_element().map(|e| e.kind()), Some(ElementKind::Button));
        assert_eq!(doc.element(&a).cloned(), a_snapshot);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut doc = document_with(&[ElementKind::Text]);
        let current = doc.selected.clone();
        let unknown = ElementId::generate(ElementKind::Video, 0);
        assert!(!doc.select(&unknown));
        assert_eq!(doc.selected, current);
    }

    #[test]
    fn test_insert_position_cascades() {
        let doc = document_with(&[ElementKind::Text, ElementKind::Text]);
        assert_eq!(doc.next_insert_position(), Point::new(80.0, 80.0));
    }
}
