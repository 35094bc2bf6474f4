// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freeform canvas elements.
//!
//! Each element kind carries its own style schema, so a style key that
//! does not apply to a kind (a font size on a button, say) cannot be
//! stored on it.

use super::color::Rgb;
use crate::util::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Placeable element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Button,
    Image,
    Video,
    Social,
}

impl ElementKind {
    /// Palette order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Text,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Video,
        ElementKind::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image",
            ElementKind::Video => "Video",
            ElementKind::Social => "Social icon",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ElementKind::Text => "T",
            ElementKind::Button => "▭",
            ElementKind::Image => "🖼",
            ElementKind::Video => "▶",
            ElementKind::Social => "@",
        }
    }

    /// Identifier prefix.
    pub fn slug(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::Social => "social",
        }
    }

    /// Whether the content field holds a URL rather than display text.
    pub fn has_url_content(self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video | ElementKind::Social)
    }

    /// Style keys the property panel exposes for this kind.
    pub fn style_keys(self) -> &'static [StyleKey] {
        match self {
            ElementKind::Text => &[StyleKey::FontSize, StyleKey::Color, StyleKey::FontWeight],
            ElementKind::Button => &[StyleKey::BackgroundColor],
            ElementKind::Image => &[StyleKey::BorderRadius, StyleKey::Opacity],
            ElementKind::Video => &[StyleKey::BorderRadius],
            ElementKind::Social => &[StyleKey::Color, StyleKey::Opacity],
        }
    }

    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Text => "New text",
            ElementKind::Button => "Button",
            ElementKind::Image => "https://placehold.co/300x200",
            ElementKind::Video => "https://www.youtube.com/embed/dQw4w9WgXcQ",
            ElementKind::Social => "https://twitter.com/",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            ElementKind::Text => Size::new(200.0, 40.0),
            ElementKind::Button => Size::new(120.0, 40.0),
            ElementKind::Image => Size::new(300.0, 200.0),
            ElementKind::Video => Size::new(320.0, 180.0),
            ElementKind::Social => Size::new(48.0, 48.0),
        }
    }

    pub fn default_style(self) -> ElementStyle {
        match self {
            ElementKind::Text => ElementStyle::Text {
                font_size: 16.0,
                color: Rgb::WHITE,
                font_weight: FontWeight::Normal,
            },
            ElementKind::Button => ElementStyle::Button {
                background_color: Rgb::ACCENT,
            },
            ElementKind::Image => ElementStyle::Image {
                border_radius: 8.0,
                opacity: 1.0,
            },
            ElementKind::Video => ElementStyle::Video { border_radius: 8.0 },
            ElementKind::Social => ElementStyle::Social {
                color: Rgb::ACCENT,
                opacity: 1.0,
            },
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Element identifier, `<kind>-<creation millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn generate(kind: ElementKind, timestamp_millis: u128) -> Self {
        Self(format!("{}-{}", kind.slug(), timestamp_millis))
    }

    /// Same identifier with a numeric suffix, used on timestamp collisions.
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Editable style properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    FontSize,
    Color,
    BackgroundColor,
    FontWeight,
    BorderRadius,
    Opacity,
}

impl StyleKey {
    pub fn label(self) -> &'static str {
        match self {
            StyleKey::FontSize => "Font size",
            StyleKey::Color => "Color",
            StyleKey::BackgroundColor => "Background color",
            StyleKey::FontWeight => "Bold",
            StyleKey::BorderRadius => "Border radius",
            StyleKey::Opacity => "Opacity",
        }
    }

    /// Slider bounds for numeric keys.
    pub fn range(self) -> Option<RangeInclusive<f32>> {
        match self {
            StyleKey::FontSize => Some(8.0..=72.0),
            StyleKey::BorderRadius => Some(0.0..=50.0),
            StyleKey::Opacity => Some(0.0..=1.0),
            StyleKey::Color | StyleKey::BackgroundColor | StyleKey::FontWeight => None,
        }
    }
}

/// A new value for exactly one style key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    FontSize(f32),
    Color(Rgb),
    BackgroundColor(Rgb),
    FontWeight(FontWeight),
    BorderRadius(f32),
    Opacity(f32),
}

impl StyleValue {
    pub fn key(&self) -> StyleKey {
        match self {
            StyleValue::FontSize(_) => StyleKey::FontSize,
            StyleValue::Color(_) => StyleKey::Color,
            StyleValue::BackgroundColor(_) => StyleKey::BackgroundColor,
            StyleValue::FontWeight(_) => StyleKey::FontWeight,
            StyleValue::BorderRadius(_) => StyleKey::BorderRadius,
            StyleValue::Opacity(_) => StyleKey::Opacity,
        }
    }
}

/// Per-kind style schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementStyle {
    #[serde(rename_all = "camelCase")]
    Text {
        font_size: f32,
        color: Rgb,
        font_weight: FontWeight,
    },
    #[serde(rename_all = "camelCase")]
    Button { background_color: Rgb },
    #[serde(rename_all = "camelCase")]
    Image { border_radius: f32, opacity: f32 },
    #[serde(rename_all = "camelCase")]
    Video { border_radius: f32 },
    #[serde(rename_all = "camelCase")]
    Social { color: Rgb, opacity: f32 },
}

impl ElementStyle {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementStyle::Text { .. } => ElementKind::Text,
            ElementStyle::Button { .. } => ElementKind::Button,
            ElementStyle::Image { .. } => ElementKind::Image,
            ElementStyle::Video { .. } => ElementKind::Video,
            ElementStyle::Social { .. } => ElementKind::Social,
        }
    }

    /// Current value of `key`, or `None` if this kind has no such key.
    pub fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match (self, key) {
            (ElementStyle::Text { font_size, .. }, StyleKey::FontSize) => {
                Some(StyleValue::FontSize(*font_size))
            }
            (ElementStyle::Text { color, .. }, StyleKey::Color)
            | (ElementStyle::Social { color, .. }, StyleKey::Color) => {
                Some(StyleValue::Color(*color))
            }
            (ElementStyle::Text { font_weight, .. }, StyleKey::FontWeight) => {
                Some(StyleValue::FontWeight(*font_weight))
            }
            (ElementStyle::Button { background_color }, StyleKey::BackgroundColor) => {
                Some(StyleValue::BackgroundColor(*background_color))
            }
            (ElementStyle::Image { border_radius, .. }, StyleKey::BorderRadius)
            | (ElementStyle::Video { border_radius }, StyleKey::BorderRadius) => {
                Some(StyleValue::BorderRadius(*border_radius))
            }
            (ElementStyle::Image { opacity, .. }, StyleKey::Opacity)
            | (ElementStyle::Social { opacity, .. }, StyleKey::Opacity) => {
                Some(StyleValue::Opacity(*opacity))
            }
            _ => None,
        }
    }

    /// Replace one style field. Returns false, leaving the style untouched,
    /// when the value's key is not part of this kind's schema.
    pub fn apply(&mut self, value: StyleValue) -> bool {
        match (self, value) {
            (ElementStyle::Text { font_size, .. }, StyleValue::FontSize(v)) => *font_size = v,
            (ElementStyle::Text { color, .. }, StyleValue::Color(v))
            | (ElementStyle::Social { color, .. }, StyleValue::Color(v)) => *color = v,
            (ElementStyle::Text { font_weight, .. }, StyleValue::FontWeight(v)) => {
                *font_weight = v
            }
            (ElementStyle::Button { background_color }, StyleValue::BackgroundColor(v)) => {
                *background_color = v
            }
            (ElementStyle::Image { border_radius, .. }, StyleValue::BorderRadius(v))
            | (ElementStyle::Video { border_radius }, StyleValue::BorderRadius(v)) => {
                *border_radius = v
            }
            (ElementStyle::Image { opacity, .. }, StyleValue::Opacity(v))
            | (ElementStyle::Social { opacity, .. }, StyleValue::Opacity(v)) => *opacity = v,
            _ => return false,
        }
        true
    }
}

/// A placed element on the freeform canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub position: Point,
    pub size: Size,
    pub content: String,
    #[serde(flatten)]
    pub style: ElementStyle,
}

impl Element {
    /// Create an element of `kind` with its default content, size and style.
    pub fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        Self {
            id,
            position,
            size: kind.default_size(),
            content: kind.default_content().to_string(),
            style: kind.default_style(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.style.kind()
    }
}
