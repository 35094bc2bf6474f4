// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-template build page.
//!
//! The template has one record of page data and a fixed set of slots;
//! selecting a slot picks which editor the properties panel shows.

use super::color::{Rgb, Rgba, CONTENT_BLOCK_ALPHA};
use serde::{Deserialize, Serialize};

/// Background image restored by "Use default background".
pub const DEFAULT_BACKGROUND: &str = "/img/626ccac7-1a87-40fd-8e28-ef0e37110edc.jpg";

/// Visual style of the left-hand content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlockStyle {
    pub background_color: Rgba,
    pub opacity: f32,
    pub border_radius: f32,
}

impl Default for ContentBlockStyle {
    fn default() -> Self {
        Self {
            background_color: Rgb::new(0, 0, 0).with_alpha(CONTENT_BLOCK_ALPHA),
            opacity: 0.9,
            border_radius: 12.0,
        }
    }
}

/// Page data shown by the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub launch_date: String,
    #[serde(rename = "steamLink")]
    pub store_link: String,
    pub video_url: String,
    pub background_image: String,
    pub content_block_style: ContentBlockStyle,
}

impl Default for BuildData {
    fn default() -> Self {
        Self {
            title: "The DRIFTER".to_string(),
            subtitle: "Chapter 1 Demo".to_string(),
            description: "A Pulp Adventure Thriller - A murdered drifter awakens. Alive again, \
                seconds before his death. Hunted and haunted, help him untangle a mad web of \
                conspiracy in this fast-paced point 'n click thrill-ride.\n\n\
                Play Chapter 1 here on Itch..."
                .to_string(),
            features: vec![
                "A Pulp Adventure Thriller from the minds that brought you Peridium and Crawl"
                    .to_string(),
                "An engrossing roller-coaster of a story- Drawing on King, Hitchcock and Lynch"
                    .to_string(),
            ],
            launch_date: "LAUNCHES JULY 17".to_string(),
            store_link: "Then check out the full game on Steam!".to_string(),
            video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
            background_image: DEFAULT_BACKGROUND.to_string(),
            content_block_style: ContentBlockStyle::default(),
        }
    }
}

/// Selectable regions of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateSlot {
    Title,
    Subtitle,
    Description,
    Features,
    Video,
    Button,
    Background,
    ContentBlock,
    LaunchDate,
    StoreLink,
}

impl TemplateSlot {
    /// Slots listed in the palette. Launch date and store link are only
    /// reachable from the preview.
    pub const PALETTE: [TemplateSlot; 8] = [
        TemplateSlot::Title,
        TemplateSlot::Subtitle,
        TemplateSlot::Description,
        TemplateSlot::Features,
        TemplateSlot::Video,
        TemplateSlot::Button,
        TemplateSlot::Background,
        TemplateSlot::ContentBlock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemplateSlot::Title => "Title",
            TemplateSlot::Subtitle => "Subtitle",
            TemplateSlot::Description => "Description",
            TemplateSlot::Features => "Features",
            TemplateSlot::Video => "Video",
            TemplateSlot::Button => "Button",
            TemplateSlot::Background => "Page background",
            TemplateSlot::ContentBlock => "Content block",
            TemplateSlot::LaunchDate => "Launch date",
            TemplateSlot::StoreLink => "Store link",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TemplateSlot::Title => "H1",
            TemplateSlot::Subtitle => "H2",
            TemplateSlot::Description => "¶",
            TemplateSlot::Features => "☰",
            TemplateSlot::Video => "▶",
            TemplateSlot::Button => "▭",
            TemplateSlot::Background => "🖼",
            TemplateSlot::ContentBlock => "□",
            TemplateSlot::LaunchDate => "📅",
            TemplateSlot::StoreLink => "🔗",
        }
    }
}

/// A single-field edit of the template data.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateEdit {
    Title(String),
    Subtitle(String),
    Description(String),
    /// Raw multi-line text, one feature per line.
    FeaturesText(String),
    LaunchDate(String),
    StoreLink(String),
    VideoUrl(String),
    BackgroundImage(String),
    ResetBackground,
    BlockColor(Rgb),
    BlockOpacity(f32),
    BlockBorderRadius(f32),
}

/// Split editor text into feature lines, dropping blank ones.
pub fn parse_features(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

impl BuildData {
    /// Apply one edit; every other field stays as it was.
    pub fn apply(&mut self, edit: TemplateEdit) {
        match edit {
            TemplateEdit::Title(v) => self.title = v,
            TemplateEdit::Subtitle(v) => self.subtitle = v,
            TemplateEdit::Description(v) => self.description = v,
            TemplateEdit::FeaturesText(text) => self.features = parse_features(&text),
            TemplateEdit::LaunchDate(v) => self.launch_date = v,
            TemplateEdit::StoreLink(v) => self.store_link = v,
            TemplateEdit::VideoUrl(v) => self.video_url = v,
            TemplateEdit::BackgroundImage(v) => self.background_image = v,
            TemplateEdit::ResetBackground => self.background_image = DEFAULT_BACKGROUND.to_string(),
            TemplateEdit::BlockColor(rgb) => {
                self.content_block_style.background_color = rgb.with_alpha(CONTENT_BLOCK_ALPHA)
            }
            TemplateEdit::BlockOpacity(v) => self.content_block_style.opacity = v,
            TemplateEdit::BlockBorderRadius(v) => self.content_block_style.border_radius = v,
        }
    }
}

/// Template data plus the selected slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub data: BuildData,
    pub selected: Option<TemplateSlot>,
}

impl TemplateDocument {
    pub fn select(&mut self, slot: TemplateSlot) {
        self.selected = Some(slot);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_page() {
        let data = BuildData::default();
        assert_eq!(data.title, "The DRIFTER");
        assert_eq!(data.features.len(), 2);
        assert_eq!(
            data.content_block_style.background_color.to_css(),
            "rgba(0, 0, 0, 0.7)"
        );
        assert_eq!(data.content_block_style.opacity, 0.9);
        assert_eq!(data.content_block_style.border_radius, 12.0);
    }

    #[test]
    fn test_title_edit_leaves_other_fields() {
        let mut data = BuildData::default();
        data.apply(TemplateEdit::Title("Night Shift".to_string()));

        let expected = BuildData {
            title: "Night Shift".to_string(),
            ..BuildData::default()
        };
        assert_eq!(data, expected);
    }

    #[test]
    fn test_each_edit_sets_only_its_field() {
        let text = |s: &str| s.to_string();
        let defaults = BuildData::default();
        let cases = vec![
            (
                TemplateEdit::Subtitle(text("Chapter 2")),
                BuildData { subtitle: text("Chapter 2"), ..BuildData::default() },
            ),
            (
                TemplateEdit::Description(text("Short blurb")),
                BuildData { description: text("Short blurb"), ..BuildData::default() },
            ),
            (
                TemplateEdit::FeaturesText(text("Fast\nLoud")),
                BuildData { features: vec![text("Fast"), text("Loud")], ..BuildData::default() },
            ),
            (
                TemplateEdit::LaunchDate(text("OUT NOW")),
                BuildData { launch_date: text("OUT NOW"), ..BuildData::default() },
            ),
            (
                TemplateEdit::StoreLink(text("Wishlist it")),
                BuildData { store_link: text("Wishlist it"), ..BuildData::default() },
            ),
            (
                TemplateEdit::VideoUrl(text("https://www.youtube.com/embed/abc")),
                BuildData {
                    video_url: text("https://www.youtube.com/embed/abc"),
                    ..BuildData::default()
                },
            ),
            (
                TemplateEdit::BackgroundImage(text("/img/other.jpg")),
                BuildData { background_image: text("/img/other.jpg"), ..BuildData::default() },
            ),
            (
                TemplateEdit::BlockOpacity(0.5),
                BuildData {
                    content_block_style: ContentBlockStyle {
                        opacity: 0.5,
                        ..defaults.content_block_style.clone()
                    },
                    ..BuildData::default()
                },
            ),
            (
                TemplateEdit::BlockBorderRadius(24.0),
                BuildData {
                    content_block_style: ContentBlockStyle {
                        border_radius: 24.0,
                        ..defaults.content_block_style.clone()
                    },
                    ..BuildData::default()
                },
            ),
        ];

        for (edit, expected) in cases {
            let mut data = BuildData::default();
            data.apply(edit.clone());
            assert_eq!(data, expected, "{:?}", edit);
        }
    }

    #[test]
    fn test_json_shape_uses_page_field_names() {
        let json = serde_json::to_value(BuildData::default()).unwrap();
        assert_eq!(json["steamLink"], "Then check out the full game on Steam!");
        assert!(json.get("storeLink").is_none());
        assert_eq!(
            json["contentBlockStyle"]["backgroundColor"],
            "rgba(0, 0, 0, 0.7)"
        );

        let back: BuildData = serde_json::from_value(json).unwrap();
        assert_eq!(back, BuildData::default());
    }

    #[test]
    fn test_features_drop_blank_lines() {
        let mut data = BuildData::default();
        data.apply(TemplateEdit::FeaturesText("one\n\n   \n two \nthree".to_string()));
        assert_eq!(data.features, vec!["one", " two ", "three"]);
    }

    #[test]
    fn test_block_color_gets_fixed_alpha() {
        let mut data = BuildData::default();
        data.apply(TemplateEdit::BlockColor(Rgb::new(255, 0, 0)));
        let style = &data.content_block_style;
        assert_eq!(style.background_color.to_css(), "rgba(255, 0, 0, 0.7)");
        assert_eq!(style.opacity, 0.9);
        assert_eq!(style.border_radius, 12.0);
    }

    #[test]
    fn test_block_opacity_roundtrip() {
        let mut data = BuildData::default();
        data.apply(TemplateEdit::BlockOpacity(0.42));
        assert_eq!(data.content_block_style.opacity, 0.42);
    }

    #[test]
    fn test_reset_background() {
        let mut data = BuildData::default();
        data.apply(TemplateEdit::BackgroundImage("not a url".to_string()));
        assert_eq!(data.background_image, "not a url");
        data.apply(TemplateEdit::ResetBackground);
        assert_eq!(data.background_image, DEFAULT_BACKGROUND);
    }
}
