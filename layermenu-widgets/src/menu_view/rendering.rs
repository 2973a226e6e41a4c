// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drawing of menu panels and rows.

use layermenu_core::text::TextRenderer;
use layermenu_core::vg::kurbo::{Affine, Point, Rect, RoundedRect, Stroke, Vec2};
use layermenu_core::vg::peniko::{Brush, Color, Fill};
use layermenu_core::vgi::{shape_to_path, Graphics};
use layermenu_theme::defaults;
use layermenu_theme::style::ResolvedStyle;

use super::constants::{SHADOW_STD_DEV_PER_BLUR, SPACER_MARGIN, SPACER_THICKNESS};
use super::row::EntryRow;

/// Draw the shadow, background and border of a panel.
pub fn render_panel(graphics: &mut dyn Graphics, rect: Rect, style: &ResolvedStyle) {
    let radius = style.border_radius;

    if let Some(shadow) = style.shadow {
        graphics.blurred_rounded_rect(
            Affine::IDENTITY,
            rect + Vec2::new(shadow.offset_x, shadow.offset_y),
            shadow.color,
            radius,
            shadow.blur * SHADOW_STD_DEV_PER_BLUR,
        );
    }

    let panel = RoundedRect::from_rect(rect, radius);
    graphics.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Brush::Solid(style.background),
        None,
        &shape_to_path(&panel),
    );

    if let Some((color, width)) = style.border {
        graphics.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            &Brush::Solid(color),
            None,
            &shape_to_path(&panel),
        );
    }
}

/// Draw one row of a panel whose origin is at `panel_origin`.
pub fn render_row(
    graphics: &mut dyn Graphics,
    text: &mut dyn TextRenderer,
    row: &EntryRow,
    panel_origin: Point,
) {
    let rect = row.absolute_rect(panel_origin);
    let style = row.style.resolved();

    if style.background != Color::TRANSPARENT {
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(style.background),
            None,
            &shape_to_path(&RoundedRect::from_rect(rect, style.border_radius)),
        );
    }

    match row.entry.text() {
        Some(label) => {
            let origin = Point::new(rect.x0 + style.padding.left, rect.y0 + style.padding.top);
            text.render(graphics, label, style.font_size, &Brush::Solid(style.color), origin);
        },
        None => {
            let rule = Rect::new(
                rect.x0 + SPACER_MARGIN,
                rect.y0 + SPACER_MARGIN,
                rect.x1 - SPACER_MARGIN,
                rect.y0 + SPACER_MARGIN + SPACER_THICKNESS,
            );
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(defaults::spacer_rule()),
                None,
                &shape_to_path(&rule),
            );
        },
    }
}
