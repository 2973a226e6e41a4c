// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in default styles for menu panels and entries.

use vello::peniko::Color;

use crate::style::{BoxStyle, Edges, Shadow};

/// Background of a menu panel.
pub fn panel_background() -> Color {
    Color::from_rgb8(60, 60, 60)
}

/// Default style of a menu panel.
pub fn panel() -> BoxStyle {
    BoxStyle::default()
        .with_background(panel_background())
        .with_padding(Edges::symmetric(3.0, 0.0))
        .with_border_radius(5.0)
        .with_min_width(10.0)
        .with_shadow(Shadow {
            offset_x: 0.0,
            offset_y: 5.0,
            blur: 20.0,
            color: Color::BLACK,
        })
}

/// Style shared by every entry row.
pub fn entry() -> BoxStyle {
    BoxStyle::default()
        .with_padding(Edges::uniform(5.0))
        .with_color(Color::WHITE)
}

/// Default style of a label row: dimmed entry text.
pub fn label() -> BoxStyle {
    entry().with_color(Color::from_rgba8(255, 255, 255, 128))
}

/// Default hover layer of interactive rows (buttons and submenus).
///
/// Only the background changes, the row keeps its base geometry.
pub fn hover() -> BoxStyle {
    BoxStyle::default().with_background(Color::from_rgba8(0, 0, 0, 51))
}

/// Color of the rule drawn for a spacer.
pub fn spacer_rule() -> Color {
    Color::from_rgba8(255, 255, 255, 128)
}
