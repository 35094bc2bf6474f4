// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric primitives and coordinate transformations.
//!
//! Canvas positions are stored relative to the canvas origin; the screen
//! position of the canvas changes with the window layout, so conversion
//! happens at the edges (drop handling and painting).

use serde::{Deserialize, Serialize};

/// A 2D point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(min: Point, size: Size) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Point {
        Point::new(self.min.x + self.size.width, self.min.y + self.size.height)
    }

    /// Inclusive containment test; zero-sized rects contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let max = self.max();
        self.size.width > 0.0
            && self.size.height > 0.0
            && point.x >= self.min.x
            && point.x <= max.x
            && point.y >= self.min.y
            && point.y <= max.y
    }

    /// Shrink on all sides by `margin`.
    pub fn shrink(&self, margin: f32) -> Self {
        Self::new(
            self.min.x + margin,
            self.min.y + margin,
            (self.size.width - 2.0 * margin).max(0.0),
            (self.size.height - 2.0 * margin).max(0.0),
        )
    }
}

/// Convert a screen pointer position into canvas-relative coordinates.
pub fn to_canvas_coordinates(pointer: Point, canvas_origin: Point) -> Point {
    Point::new(pointer.x - canvas_origin.x, pointer.y - canvas_origin.y)
}

/// Convert canvas-relative coordinates back to screen coordinates.
pub fn to_screen_coordinates(point: Point, canvas_origin: Point) -> Point {
    Point::new(point.x + canvas_origin.x, point.y + canvas_origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_screen_roundtrip() {
        let origin = Point::new(264.0, 72.0);
        let pointer = Point::new(364.0, 122.0);

        let canvas = to_canvas_coordinates(pointer, origin);
        assert_eq!(canvas, Point::new(100.0, 50.0));
        assert_eq!(to_screen_coordinates(canvas, origin), pointer);
    }

    #[test]
    fn test_pointer_left_of_origin_goes_negative() {
        let canvas = to_canvas_coordinates(Point::new(10.0, 5.0), Point::new(264.0, 72.0));
        assert_eq!(canvas, Point::new(-254.0, -67.0));
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 50.0)));
        assert!(!rect.contains(Point::new(110.5, 50.0)));
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).contains(Point::new(0.0, 0.0)));
    }
}
