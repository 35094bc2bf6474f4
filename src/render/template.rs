// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Template preview: content block on the left, media on the right.

use super::{estimate_text_height, HitTarget, TextRun, ViewNode};
use crate::models::color::Rgba;
use crate::models::template::{BuildData, TemplateSlot};
use crate::util::geometry::{Point, Rect};

const PAGE_PADDING: f32 = 32.0;
const BLOCK_PADDING: f32 = 32.0;
const GAP: f32 = 16.0;

const PAGE_BACKGROUND: Rgba = Rgba::new(0x11, 0x18, 0x27, 1.0);
const RED_500: Rgba = Rgba::new(0xEF, 0x44, 0x44, 1.0);
const RED_400: Rgba = Rgba::new(0xF8, 0x71, 0x71, 1.0);
const ORANGE_400: Rgba = Rgba::new(0xFB, 0x92, 0x3C, 1.0);
const GRAY_300: Rgba = Rgba::new(0xD1, 0xD5, 0xDB, 1.0);
const GRAY_600: Rgba = Rgba::new(0x4B, 0x55, 0x63, 1.0);
const GRAY_800: Rgba = Rgba::new(0x1F, 0x29, 0x37, 1.0);
const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

/// Stacks text blocks top to bottom inside a column.
struct Column {
    x: f32,
    y: f32,
    width: f32,
}

impl Column {
    fn text_block(
        &mut self,
        run: TextRun,
        slot: Option<TemplateSlot>,
        selected: Option<TemplateSlot>,
        margin_bottom: f32,
    ) -> ViewNode {
        let height = estimate_text_height(&run.text, run.font_size, self.width);
        let mut node = ViewNode::new(Rect::new(self.x, self.y, self.width, height)).text(run);
        if let Some(slot) = slot {
            node = node
                .target(HitTarget::Slot(slot))
                .highlighted(selected == Some(slot));
        }
        self.y += height + margin_bottom;
        node
    }
}

/// Build the preview tree for the template inside `viewport`.
pub fn render(data: &BuildData, selected: Option<TemplateSlot>, viewport: Rect) -> ViewNode {
    let page = viewport.shrink(PAGE_PADDING);
    let column_width = page.size.width / 2.0;
    let left = Rect::new(page.min.x, page.min.y, column_width, page.size.height);
    let right = Rect::new(
        page.min.x + column_width,
        page.min.y,
        column_width,
        page.size.height,
    );

    let background = TextRun::new(format!("Background: {}", data.background_image), 11.0, GRAY_600);
    let caption_rect = Rect::new(
        viewport.min.x + PAGE_PADDING,
        viewport.max().y - PAGE_PADDING * 0.75,
        viewport.size.width - 2.0 * PAGE_PADDING,
        14.0,
    );

    ViewNode::new(viewport)
        .fill(PAGE_BACKGROUND)
        .child(ViewNode::new(caption_rect).text(background))
        .child(content_block(data, selected, left))
        .child(media_column(data, selected, right))
}

fn content_block(data: &BuildData, selected: Option<TemplateSlot>, area: Rect) -> ViewNode {
    let style = &data.content_block_style;
    let inner = area.shrink(BLOCK_PADDING);
    let mut column = Column {
        x: inner.min.x,
        y: inner.min.y,
        width: inner.size.width,
    };

    let title = column.text_block(
        TextRun::new(data.title.as_str(), 60.0, RED_500).bold(true),
        Some(TemplateSlot::Title),
        selected,
        16.0,
    );
    let subtitle = column.text_block(
        TextRun::new(format!("– {} –", data.subtitle), 20.0, RED_400),
        Some(TemplateSlot::Subtitle),
        selected,
        24.0,
    );
    let description = column.text_block(
        TextRun::new(data.description.as_str(), 16.0, GRAY_300),
        Some(TemplateSlot::Description),
        selected,
        24.0,
    );
    let store_link = column.text_block(
        TextRun::new(data.store_link.as_str(), 16.0, RED_400).underline(),
        Some(TemplateSlot::StoreLink),
        selected,
        16.0,
    );
    let launch_date = column.text_block(
        TextRun::new(format!("– {} –", data.launch_date), 18.0, RED_500).bold(true),
        Some(TemplateSlot::LaunchDate),
        selected,
        32.0,
    );

    let features_top = column.y;
    let heading = column.text_block(
        TextRun::new("Features", 24.0, ORANGE_400).bold(true),
        None,
        selected,
        16.0,
    );
    let mut features = ViewNode::new(Rect::default())
        .target(HitTarget::Slot(TemplateSlot::Features))
        .highlighted(selected == Some(TemplateSlot::Features))
        .child(heading);
    for feature in &data.features {
        let bullet = column.text_block(
            TextRun::new(format!("• {}", feature), 16.0, GRAY_300),
            None,
            selected,
            8.0,
        );
        features = features.child(bullet);
    }
    features.rect = Rect::new(column.x, features_top, column.width, column.y - features_top);

    ViewNode::new(area)
        .fill(style.background_color)
        .rounding(style.border_radius)
        .opacity(style.opacity)
        .target(HitTarget::Slot(TemplateSlot::ContentBlock))
        .highlighted(selected == Some(TemplateSlot::ContentBlock))
        .child(title)
        .child(subtitle)
        .child(description)
        .child(store_link)
        .child(launch_date)
        .child(features)
}

fn media_column(data: &BuildData, selected: Option<TemplateSlot>, area: Rect) -> ViewNode {
    let inner = area.shrink(BLOCK_PADDING);
    let video_height = inner.size.width * 9.0 / 16.0;
    let video = ViewNode::new(Rect::new(inner.min.x, inner.min.y, inner.size.width, video_height))
        .fill(BLACK)
        .rounding(8.0)
        .text(TextRun::new(format!("▶ {}", data.video_url), 14.0, GRAY_300).centered())
        .target(HitTarget::Slot(TemplateSlot::Video))
        .highlighted(selected == Some(TemplateSlot::Video));

    let tile_width = (inner.size.width - GAP) / 2.0;
    let tile_top = inner.min.y + video_height + GAP * 1.5;
    let mut column = ViewNode::new(area).child(video);
    for i in 0..2 {
        let origin = Point::new(inner.min.x + i as f32 * (tile_width + GAP), tile_top);
        column = column.child(
            ViewNode::new(Rect::new(origin.x, origin.y, tile_width, tile_width * 9.0 / 16.0))
                .fill(GRAY_800)
                .rounding(8.0)
                .text(TextRun::new("🖼", 32.0, GRAY_600).centered()),
        );
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::hit_test;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn find_slot(node: &ViewNode, slot: TemplateSlot) -> Option<&ViewNode> {
        if node.target == Some(HitTarget::Slot(slot)) {
            return Some(node);
        }
        node.children.iter().find_map(|child| find_slot(child, slot))
    }

    fn center(rect: Rect) -> Point {
        Point::new(
            rect.min.x + rect.size.width / 2.0,
            rect.min.y + rect.size.height / 2.0,
        )
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = BuildData::default();
        let a = render(&data, Some(TemplateSlot::Title), viewport());
        let b = render(&data, Some(TemplateSlot::Title), viewport());
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_click_beats_content_block() {
        let tree = render(&BuildData::default(), None, viewport());
        let title = find_slot(&tree, TemplateSlot::Title).unwrap();
        assert_eq!(
            hit_test(&tree, center(title.rect)),
            Some(&HitTarget::Slot(TemplateSlot::Title))
        );

        let block = find_slot(&tree, TemplateSlot::ContentBlock).unwrap();
        let padding_point = Point::new(block.rect.min.x + 4.0, block.rect.min.y + 4.0);
        assert_eq!(
            hit_test(&tree, padding_point),
            Some(&HitTarget::Slot(TemplateSlot::ContentBlock))
        );
    }

    #[test]
    fn test_page_margin_selects_nothing() {
        let tree = render(&BuildData::default(), None, viewport());
        assert_eq!(hit_test(&tree, Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_only_selected_slot_is_highlighted() {
        let tree = render(&BuildData::default(), Some(TemplateSlot::Video), viewport());
        assert!(find_slot(&tree, TemplateSlot::Video).unwrap().outline.is_some());
        assert!(find_slot(&tree, TemplateSlot::Title).unwrap().outline.is_none());
    }

    #[test]
    fn test_block_style_flows_into_tree() {
        let mut data = BuildData::default();
        data.content_block_style.opacity = 0.5;
        data.content_block_style.border_radius = 20.0;
        let tree = render(&data, None, viewport());
        let block = find_slot(&tree, TemplateSlot::ContentBlock).unwrap();
        assert_eq!(block.opacity, 0.5);
        assert_eq!(block.rounding, 20.0);
        assert_eq!(block.fill, Some(data.content_block_style.background_color));
    }

    #[test]
    fn test_one_bullet_per_feature() {
        let mut data = BuildData::default();
        data.features = vec!["a".into(), "b".into(), "c".into()];
        let tree = render(&data, None, viewport());
        let features = find_slot(&tree, TemplateSlot::Features).unwrap();
        // heading plus one node per feature
        assert_eq!(features.children.len(), 4);
    }
}
