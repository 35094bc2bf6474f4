// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Properties panel.
//!
//! Shows the editors for the current selection: a fixed editor per
//! template slot, or the content, geometry and style schema of a canvas
//! element. Widgets edit a local copy and report the change as an action.

use crate::models::{
    canvas::{CanvasDocument, ElementEdit},
    color::Rgb,
    element::{Element, ElementKind, FontWeight, StyleValue},
    template::{TemplateDocument, TemplateEdit, TemplateSlot},
};
use crate::state::{Action, EditorMode, EditorState};
use crate::util::geometry::{Point, Size};

pub fn show(ui: &mut egui::Ui, state: &EditorState) -> Action {
    match state.mode {
        EditorMode::Template => template_panel(ui, &state.template),
        EditorMode::Canvas => element_panel(ui, &state.canvas),
    }
}

fn empty_selection(ui: &mut egui::Ui, tip: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("✋").size(48.0).weak());
        ui.label("Select an element");
        ui.label(egui::RichText::new("to edit it").small().weak());
    });
    ui.add_space(12.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(format!("💡 {}", tip)).small().weak());
    });
}

fn panel_heading(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("⚙").color(ui.visuals().selection.bg_fill));
        ui.heading(title);
    });
    ui.separator();
}

/// Text editor bound to a copy of `value`; returns the new text on change.
fn text_field(ui: &mut egui::Ui, label: &str, value: &str, hint: &str, rows: usize) -> Option<String> {
    ui.label(label);
    let mut buffer = value.to_string();
    let edit = if rows > 1 {
        egui::TextEdit::multiline(&mut buffer).desired_rows(rows)
    } else {
        egui::TextEdit::singleline(&mut buffer)
    };
    let changed = ui
        .add(edit.hint_text(hint).desired_width(f32::INFINITY))
        .changed();
    ui.add_space(6.0);
    changed.then_some(buffer)
}

/// Text editor that keeps its raw text in egui memory while focused.
///
/// Used where the model normalizes the input (blank feature lines are
/// dropped, colors must parse), so the next frame doesn't overwrite what
/// the user is still typing.
fn draft_field(ui: &mut egui::Ui, id_source: &str, value: &str, hint: &str, rows: usize) -> Option<String> {
    let id = ui.make_persistent_id(id_source);
    let mut buffer = ui
        .data(|d| d.get_temp::<String>(id))
        .unwrap_or_else(|| value.to_string());
    let edit = if rows > 1 {
        egui::TextEdit::multiline(&mut buffer).desired_rows(rows)
    } else {
        egui::TextEdit::singleline(&mut buffer)
    };
    let response = ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));
    let changed = response.changed();
    if response.has_focus() {
        ui.data_mut(|d| d.insert_temp(id, buffer.clone()));
    } else {
        ui.data_mut(|d| d.remove::<String>(id));
    }
    ui.add_space(6.0);
    changed.then_some(buffer)
}

/// Let the user pick a local image; the path is used as an opaque URL.
fn browse_image() -> Option<String> {
    rfd::FileDialog::new()
        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "svg"])
        .pick_file()
        .map(|path| path.display().to_string())
}

fn template_panel(ui: &mut egui::Ui, doc: &TemplateDocument) -> Action {
    let Some(slot) = doc.selected else {
        empty_selection(ui, "Click any block in the preview or pick one in the left panel");
        return Action::None;
    };

    panel_heading(ui, &format!("Settings: {}", slot.label()));

    let data = &doc.data;
    let edit = match slot {
        TemplateSlot::Title => {
            text_field(ui, "Title", &data.title, "Game title", 1).map(TemplateEdit::Title)
        }
        TemplateSlot::Subtitle => {
            text_field(ui, "Subtitle", &data.subtitle, "Version, chapter...", 1)
                .map(TemplateEdit::Subtitle)
        }
        TemplateSlot::Description => {
            text_field(ui, "Description", &data.description, "Game description...", 6)
                .map(TemplateEdit::Description)
        }
        TemplateSlot::Features => {
            ui.label("Features (one per line)");
            draft_field(
                ui,
                "features_text",
                &data.features.join("\n"),
                "Feature 1\nFeature 2...",
                4,
            )
            .map(TemplateEdit::FeaturesText)
        }
        TemplateSlot::Video => text_field(
            ui,
            "Video link (YouTube embed)",
            &data.video_url,
            "https://www.youtube.com/embed/...",
            1,
        )
        .map(TemplateEdit::VideoUrl),
        TemplateSlot::LaunchDate => {
            text_field(ui, "Launch date", &data.launch_date, "LAUNCHES JULY 17", 1)
                .map(TemplateEdit::LaunchDate)
        }
        TemplateSlot::StoreLink => text_field(
            ui,
            "Link text",
            &data.store_link,
            "Then check out the full game on Steam!",
            1,
        )
        .map(TemplateEdit::StoreLink),
        TemplateSlot::Background => background_editor(ui, &data.background_image),
        TemplateSlot::ContentBlock => content_block_editor(ui, doc),
        TemplateSlot::Button => {
            ui.label(egui::RichText::new("This block has no editable properties.").weak());
            None
        }
    };

    edit.map_or(Action::None, Action::EditTemplate)
}

fn background_editor(ui: &mut egui::Ui, url: &str) -> Option<TemplateEdit> {
    let mut edit = text_field(
        ui,
        "Background image (URL)",
        url,
        "https://example.com/image.jpg",
        1,
    )
    .map(TemplateEdit::BackgroundImage);

    let width = ui.available_width();
    if ui
        .add(egui::Button::new("📂 Browse...").min_size(egui::vec2(width, 0.0)))
        .clicked()
    {
        if let Some(path) = browse_image() {
            edit = Some(TemplateEdit::BackgroundImage(path));
        }
    }
    if ui
        .add(egui::Button::new("🖼 Use default background").min_size(egui::vec2(width, 0.0)))
        .clicked()
    {
        edit = Some(TemplateEdit::ResetBackground);
    }
    edit
}

fn content_block_editor(ui: &mut egui::Ui, doc: &TemplateDocument) -> Option<TemplateEdit> {
    let style = &doc.data.content_block_style;
    let mut edit = None;

    ui.label("Block background color");
    let current = style.background_color.rgb();
    let mut rgb = [current.r, current.g, current.b];
    if ui.color_edit_button_srgb(&mut rgb).changed() {
        edit = Some(TemplateEdit::BlockColor(Rgb::new(rgb[0], rgb[1], rgb[2])));
    }
    if let Some(hex) = draft_field(ui, "block_color_hex", &current.to_hex(), "#000000", 1) {
        // Half-typed values don't apply until they parse
        if let Some(rgb) = Rgb::from_hex(&hex) {
            edit = Some(TemplateEdit::BlockColor(rgb));
        }
    }
    ui.label(egui::RichText::new(style.background_color.to_css()).small().weak());
    ui.add_space(8.0);

    let mut percent = style.opacity * 100.0;
    ui.label(format!("Opacity: {}%", percent.round()));
    if ui
        .add(egui::Slider::new(&mut percent, 0.0..=100.0).step_by(5.0).show_value(false))
        .changed()
    {
        edit = Some(TemplateEdit::BlockOpacity(percent / 100.0));
    }
    ui.add_space(8.0);

    let mut radius = style.border_radius;
    ui.label(format!("Corner radius: {}px", radius));
    if ui
        .add(egui::Slider::new(&mut radius, 0.0..=50.0).step_by(2.0).show_value(false))
        .changed()
    {
        edit = Some(TemplateEdit::BlockBorderRadius(radius));
    }

    edit
}

fn element_panel(ui: &mut egui::Ui, doc: &CanvasDocument) -> Action {
    let Some(element) = doc.selected_element() else {
        empty_selection(ui, "Drag an element from the left panel onto the canvas, then click it");
        return Action::None;
    };
    let kind = element.kind();

    panel_heading(ui, kind.label());
    ui.label(egui::RichText::new(element.id.as_str()).small().weak());
    ui.add_space(6.0);

    let mut edit = None;

    let (label, hint) = if kind.has_url_content() {
        ("URL", "https://...")
    } else {
        ("Content", "Text")
    };
    if let Some(content) = text_field(ui, label, &element.content, hint, 1) {
        edit = Some(ElementEdit::Content(content));
    }
    if kind == ElementKind::Image && ui.button("📂 Browse...").clicked() {
        if let Some(path) = browse_image() {
            edit = Some(ElementEdit::Content(path));
        }
    }

    ui.add_space(6.0);
    if let Some(geometry) = geometry_editor(ui, element) {
        edit = Some(geometry);
    }

    ui.add_space(6.0);
    ui.separator();
    for key in kind.style_keys() {
        if let Some(value) = element.style.get(*key) {
            if let Some(changed) = style_editor(ui, value) {
                edit = Some(ElementEdit::Style(changed));
            }
        }
    }

    ui.add_space(16.0);
    if ui.button("🗑 Delete element").clicked() {
        return Action::DeleteSelected;
    }

    edit.map_or(Action::None, Action::EditElement)
}

fn geometry_editor(ui: &mut egui::Ui, element: &Element) -> Option<ElementEdit> {
    let mut x = element.position.x;
    let mut y = element.position.y;
    let mut w = element.size.width;
    let mut h = element.size.height;
    let mut edit = None;

    egui::Grid::new("element_geometry")
        .num_columns(4)
        .spacing([6.0, 4.0])
        .show(ui, |ui| {
            ui.label("x:");
            let moved_x = ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed();
            ui.label("y:");
            let moved_y = ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed();
            ui.end_row();
            ui.label("w:");
            let sized_w = ui.add(egui::DragValue::new(&mut w).speed(1.0)).changed();
            ui.label("h:");
            let sized_h = ui.add(egui::DragValue::new(&mut h).speed(1.0)).changed();
            ui.end_row();

            if moved_x || moved_y {
                edit = Some(ElementEdit::Position(Point::new(x, y)));
            }
            if sized_w || sized_h {
                edit = Some(ElementEdit::Size(Size::new(w, h)));
            }
        });

    edit
}

fn style_editor(ui: &mut egui::Ui, value: StyleValue) -> Option<StyleValue> {
    let key = value.key();
    match value {
        StyleValue::FontSize(v) | StyleValue::BorderRadius(v) | StyleValue::Opacity(v) => {
            let mut v = v;
            let range = key.range().unwrap_or(0.0..=100.0);
            ui.label(key.label());
            let changed = ui.add(egui::Slider::new(&mut v, range)).changed();
            changed.then(|| match value {
                StyleValue::FontSize(_) => StyleValue::FontSize(v),
                StyleValue::BorderRadius(_) => StyleValue::BorderRadius(v),
                _ => StyleValue::Opacity(v),
            })
        }
        StyleValue::Color(rgb) | StyleValue::BackgroundColor(rgb) => {
            let mut picked = [rgb.r, rgb.g, rgb.b];
            let changed = ui
                .horizontal(|ui| {
                    let changed = ui.color_edit_button_srgb(&mut picked).changed();
                    ui.label(key.label());
                    ui.label(egui::RichText::new(rgb.to_hex()).small().weak());
                    changed
                })
                .inner;
            changed.then(|| {
                let picked = Rgb::new(picked[0], picked[1], picked[2]);
                match value {
                    StyleValue::Color(_) => StyleValue::Color(picked),
                    _ => StyleValue::BackgroundColor(picked),
                }
            })
        }
        StyleValue::FontWeight(weight) => {
            let mut bold = weight == FontWeight::Bold;
            let changed = ui.checkbox(&mut bold, key.label()).changed();
            changed.then(|| {
                StyleValue::FontWeight(if bold { FontWeight::Bold } else { FontWeight::Normal })
            })
        }
    }
}
