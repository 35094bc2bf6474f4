// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freeform canvas preview.

use super::{HitTarget, TextRun, ViewNode};
use crate::models::canvas::CanvasDocument;
use crate::models::color::{Rgb, Rgba};
use crate::models::element::{Element, ElementStyle, FontWeight};
use crate::util::geometry::{to_screen_coordinates, Rect};

const CANVAS_BACKGROUND: Rgba = Rgba::new(0x11, 0x18, 0x27, 1.0);
const PLACEHOLDER: Rgba = Rgba::new(0x37, 0x41, 0x51, 1.0);
const CAPTION: Rgba = Rgba::new(0xD1, 0xD5, 0xDB, 1.0);
const BUTTON_RADIUS: f32 = 6.0;

/// Build the preview tree with the canvas origin at `viewport.min`.
pub fn render(doc: &CanvasDocument, viewport: Rect) -> ViewNode {
    let mut root = ViewNode::new(viewport).fill(CANVAS_BACKGROUND);
    if doc.is_empty() {
        root = root.child(
            ViewNode::new(viewport).text(
                TextRun::new("Drag an element here from the palette", 16.0, PLACEHOLDER)
                    .centered(),
            ),
        );
    }
    for element in &doc.elements {
        let selected = doc.selected.as_ref() == Some(&element.id);
        root = root.child(element_node(element, viewport, selected));
    }
    root
}

fn element_node(element: &Element, viewport: Rect, selected: bool) -> ViewNode {
    let min = to_screen_coordinates(element.position, viewport.min);
    let node = ViewNode::new(Rect::from_origin_size(min, element.size))
        .target(HitTarget::Element(element.id.clone()))
        .highlighted(selected);

    match &element.style {
        ElementStyle::Text {
            font_size,
            color,
            font_weight,
        } => node.text(
            TextRun::new(element.content.as_str(), *font_size, Rgba::from(*color))
                .bold(*font_weight == FontWeight::Bold),
        ),
        ElementStyle::Button { background_color } => node
            .fill(Rgba::from(*background_color))
            .rounding(BUTTON_RADIUS)
            .text(
                TextRun::new(element.content.as_str(), 14.0, Rgba::from(Rgb::WHITE))
                    .bold(true)
                    .centered(),
            ),
        ElementStyle::Image {
            border_radius,
            opacity,
        } => node
            .fill(PLACEHOLDER)
            .rounding(*border_radius)
            .opacity(*opacity)
            .text(TextRun::new(format!("🖼 {}", element.content), 12.0, CAPTION).centered()),
        ElementStyle::Video { border_radius } => node
            .fill(Rgba::new(0, 0, 0, 1.0))
            .rounding(*border_radius)
            .text(TextRun::new(format!("▶ {}", element.content), 12.0, CAPTION).centered()),
        ElementStyle::Social { color, opacity } => {
            let radius = element.size.width.min(element.size.height) / 2.0;
            node.fill(Rgba::from(*color))
                .rounding(radius)
                .opacity(*opacity)
                .text(TextRun::new("@", 20.0, Rgba::from(Rgb::WHITE)).bold(true).centered())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::ElementKind;
    use crate::render::hit_test;
    use crate::util::geometry::Point;

    fn viewport() -> Rect {
        Rect::new(200.0, 100.0, 800.0, 600.0)
    }

    #[test]
    fn test_elements_are_offset_by_canvas_origin() {
        let mut doc = CanvasDocument::new();
        doc.insert(ElementKind::Button, Point::new(100.0, 50.0));
        let tree = render(&doc, viewport());

        let node = &tree.children[0];
        assert_eq!(node.rect, Rect::new(300.0, 150.0, 120.0, 40.0));
        assert_eq!(node.fill, Some(Rgba::new(0x6E, 0x48, 0xEB, 1.0)));
        assert!(node.outline.is_some());
    }

    #[test]
    fn test_only_selected_element_is_highlighted() {
        let mut doc = CanvasDocument::new();
        doc.insert(ElementKind::Text, Point::new(0.0, 0.0));
        doc.insert(ElementKind::Image, Point::new(300.0, 0.0));
        let tree = render(&doc, viewport());

        assert!(tree.children[0].outline.is_none());
        assert!(tree.children[1].outline.is_some());
    }

    #[test]
    fn test_later_element_wins_overlap() {
        let mut doc = CanvasDocument::new();
        let below = doc.insert(ElementKind::Image, Point::new(0.0, 0.0));
        let above = doc.insert(ElementKind::Button, Point::new(10.0, 10.0));
        let tree = render(&doc, viewport());

        assert_eq!(
            hit_test(&tree, Point::new(220.0, 120.0)),
            Some(&HitTarget::Element(above))
        );
        assert_eq!(
            hit_test(&tree, Point::new(205.0, 105.0)),
            Some(&HitTarget::Element(below))
        );
        assert_eq!(hit_test(&tree, Point::new(900.0, 600.0)), None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut doc = CanvasDocument::new();
        doc.insert(ElementKind::Social, Point::new(5.0, 5.0));
        doc.insert(ElementKind::Video, Point::new(-40.0, 20.0));
        assert_eq!(render(&doc, viewport()), render(&doc, viewport()));
    }

    #[test]
    fn test_style_applied_directly() {
        let mut doc = CanvasDocument::new();
        doc.insert(ElementKind::Image, Point::new(0.0, 0.0));
        if let Some(element) = doc.elements.first_mut() {
            element.style = ElementStyle::Image {
                border_radius: 24.0,
                opacity: 0.42,
            };
        }
        let node = &render(&doc, viewport()).children[0];
        assert_eq!(node.rounding, 24.0);
        assert_eq!(node.opacity, 0.42);
    }
}
