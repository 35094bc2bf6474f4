// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview rendering.
//!
//! Both editors project their state into a tree of `ViewNode`s. Building
//! the tree is pure: the same state and viewport always give the same
//! tree. Painting it with egui lives in `ui::paint`, and click handling
//! uses `hit_test` on the same tree so what is drawn is what is clicked.

pub mod canvas;
pub mod template;

use crate::models::{color::Rgba, element::ElementId, template::TemplateSlot};
use crate::util::geometry::{Point, Rect};

/// Outline drawn around the selected node.
pub const HIGHLIGHT: Rgba = Rgba::new(0x38, 0xBD, 0xF8, 1.0);

/// What a click on a node selects.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    Slot(TemplateSlot),
    Element(ElementId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    TopLeft,
    Center,
}

/// A run of text drawn inside a node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font_size: f32,
    pub color: Rgba,
    pub bold: bool,
    pub underline: bool,
    pub align: TextAlign,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font_size: f32, color: Rgba) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            bold: false,
            underline: false,
            align: TextAlign::TopLeft,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Rgba,
}

/// One box in the preview tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub rect: Rect,
    pub fill: Option<Rgba>,
    pub rounding: f32,
    /// Multiplies into every descendant.
    pub opacity: f32,
    pub outline: Option<Outline>,
    pub text: Option<TextRun>,
    pub target: Option<HitTarget>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: None,
            rounding: 0.0,
            opacity: 1.0,
            outline: None,
            text: None,
            target: None,
            children: Vec::new(),
        }
    }

    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn text(mut self, run: TextRun) -> Self {
        self.text = Some(run);
        self
    }

    pub fn target(mut self, target: HitTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn highlighted(mut self, on: bool) -> Self {
        if on {
            self.outline = Some(Outline {
                width: 2.0,
                color: HIGHLIGHT,
            });
        }
        self
    }

    pub fn child(mut self, node: ViewNode) -> Self {
        self.children.push(node);
        self
    }
}

/// Find what a click at `point` selects: the deepest, last-drawn node
/// with a target whose rect contains the point.
pub fn hit_test(node: &ViewNode, point: Point) -> Option<&HitTarget> {
    if !node.rect.contains(point) {
        return None;
    }
    node.children
        .iter()
        .rev()
        .find_map(|child| hit_test(child, point))
        .or(node.target.as_ref())
}

/// Rough height of wrapped text, used to stack template blocks.
pub(crate) fn estimate_text_height(text: &str, font_size: f32, width: f32) -> f32 {
    let char_width = font_size * 0.55;
    let chars_per_line = (width / char_width).floor().max(1.0) as usize;
    let lines: usize = text
        .split('\n')
        .map(|paragraph| paragraph.chars().count().div_ceil(chars_per_line).max(1))
        .sum();
    lines as f32 * font_size * 1.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_prefers_deepest_then_last() {
        let tree = ViewNode::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .child(
                ViewNode::new(Rect::new(0.0, 0.0, 60.0, 60.0))
                    .target(HitTarget::Slot(TemplateSlot::ContentBlock))
                    .child(
                        ViewNode::new(Rect::new(10.0, 10.0, 20.0, 20.0))
                            .target(HitTarget::Slot(TemplateSlot::Title)),
                    ),
            )
            .child(
                ViewNode::new(Rect::new(50.0, 50.0, 40.0, 40.0))
                    .target(HitTarget::Slot(TemplateSlot::Video)),
            );

        assert_eq!(
            hit_test(&tree, Point::new(15.0, 15.0)),
            Some(&HitTarget::Slot(TemplateSlot::Title))
        );
        assert_eq!(
            hit_test(&tree, Point::new(40.0, 5.0)),
            Some(&HitTarget::Slot(TemplateSlot::ContentBlock))
        );
        assert_eq!(
            hit_test(&tree, Point::new(55.0, 55.0)),
            Some(&HitTarget::Slot(TemplateSlot::Video))
        );
        assert_eq!(hit_test(&tree, Point::new(95.0, 5.0)), None);
        assert_eq!(hit_test(&tree, Point::new(150.0, 5.0)), None);
    }

    #[test]
    fn test_text_height_counts_paragraphs() {
        let one = estimate_text_height("short", 10.0, 500.0);
        let two = estimate_text_height("short\nshort", 10.0, 500.0);
        let empty_line = estimate_text_height("a\n\nb", 10.0, 500.0);
        assert_eq!(two, one * 2.0);
        assert_eq!(empty_line, one * 3.0);
    }
}
