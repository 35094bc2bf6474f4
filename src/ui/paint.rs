// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Paint a preview tree with the egui painter.

use crate::models::color::Rgba;
use crate::render::{TextAlign, TextRun, ViewNode};
use crate::util::geometry::{Point, Rect};

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.min.x, rect.min.y),
        egui::vec2(rect.size.width, rect.size.height),
    )
}

pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn from_egui_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

fn to_color(color: Rgba, opacity: f32) -> egui::Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
        .gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Draw `node` and its children, multiplying opacity down the tree.
pub fn paint(painter: &egui::Painter, node: &ViewNode, parent_opacity: f32) {
    let opacity = parent_opacity * node.opacity;
    let rect = to_egui_rect(node.rect);
    let rounding = egui::Rounding::same(node.rounding);

    if let Some(fill) = node.fill {
        painter.rect_filled(rect, rounding, to_color(fill, opacity));
    }
    if let Some(run) = &node.text {
        paint_text(painter, run, rect, opacity);
    }
    for child in &node.children {
        paint(painter, child, opacity);
    }
    // Outlines ignore opacity so a faded selection stays visible.
    if let Some(outline) = node.outline {
        painter.rect_stroke(
            rect.expand(outline.width),
            rounding,
            egui::Stroke::new(outline.width, to_color(outline.color, 1.0)),
        );
    }
}

fn paint_text(painter: &egui::Painter, run: &TextRun, rect: egui::Rect, opacity: f32) {
    let color = to_color(run.color, opacity);
    let galley = painter.layout(
        run.text.clone(),
        egui::FontId::proportional(run.font_size),
        color,
        rect.width().max(1.0),
    );
    let pos = match run.align {
        TextAlign::TopLeft => rect.min,
        TextAlign::Center => rect.center() - galley.size() / 2.0,
    };
    if run.bold {
        // The default fonts have no bold face; overstrike instead.
        painter.galley(pos + egui::vec2(0.6, 0.0), galley.clone(), color);
    }
    let text_rect = egui::Rect::from_min_size(pos, galley.size());
    painter.galley(pos, galley, color);
    if run.underline {
        painter.line_segment(
            [text_rect.left_bottom(), text_rect.right_bottom()],
            egui::Stroke::new(1.0, color),
        );
    }
}
