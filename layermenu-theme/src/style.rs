// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Box Styles
//!
//! A [BoxStyle] is a partial style: every field is optional and unset fields
//! fall through to whatever style it is merged over. This mirrors how panel,
//! entry and hover styles are layered on top of each other:
//!
//! ```rust
//! use layermenu_theme::style::{BoxStyle, Edges};
//! use vello::peniko::Color;
//!
//! let base = BoxStyle::default()
//!     .with_padding(Edges::uniform(5.0))
//!     .with_color(Color::WHITE);
//! let hover = BoxStyle::default().with_background(Color::from_rgba8(0, 0, 0, 51));
//!
//! let hovered = base.merged(&hover).resolve();
//! assert_eq!(hovered.padding, Edges::uniform(5.0));
//! assert_eq!(hovered.background, Color::from_rgba8(0, 0, 0, 51));
//! ```

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

/// Font size used when no style sets one.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Spacing on each side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// No spacing at all.
    pub const ZERO: Edges = Edges::uniform(0.0);

    /// The same spacing on every side.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Separate vertical (top/bottom) and horizontal (left/right) spacing.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Sum of the left and right edges.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A drop shadow behind a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    /// Horizontal offset of the shadow.
    pub offset_x: f64,
    /// Vertical offset of the shadow.
    pub offset_y: f64,
    /// Blur radius.
    pub blur: f64,
    /// Shadow color.
    #[serde(with = "crate::serde_color")]
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            color: Color::BLACK,
        }
    }
}

/// A partial box style. Unset fields fall through when merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Background fill.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Text color.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Inner spacing between the box edge and its content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    /// Corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Border color. A border is only drawn when both color and width are set.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Minimum width of the box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Font size of the text inside the box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Drop shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl BoxStyle {
    /// Layer `over` on top of `self`. Fields set in `over` win.
    pub fn merged(&self, over: &BoxStyle) -> BoxStyle {
        BoxStyle {
            background: over.background.or(self.background),
            color: over.color.or(self.color),
            padding: over.padding.or(self.padding),
            border_radius: over.border_radius.or(self.border_radius),
            border_color: over.border_color.or(self.border_color),
            border_width: over.border_width.or(self.border_width),
            min_width: over.min_width.or(self.min_width),
            font_size: over.font_size.or(self.font_size),
            shadow: over.shadow.or(self.shadow),
        }
    }

    /// Fill the remaining gaps with fallbacks.
    pub fn resolve(&self) -> ResolvedStyle {
        let border = match (self.border_color, self.border_width) {
            (Some(color), Some(width)) if width > 0.0 => Some((color, width)),
            _ => None,
        };

        ResolvedStyle {
            background: self.background.unwrap_or(Color::TRANSPARENT),
            color: self.color.unwrap_or(Color::WHITE),
            padding: self.padding.unwrap_or(Edges::ZERO),
            border_radius: self.border_radius.unwrap_or(0.0),
            border,
            min_width: self.min_width.unwrap_or(0.0),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            shadow: self.shadow,
        }
    }

    /// Set the background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the corner radius.
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the border color and width.
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    /// Set the minimum width.
    pub fn with_min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the drop shadow.
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// A fully resolved box style, ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    /// Background fill (transparent when unset).
    pub background: Color,
    /// Text color (white when unset).
    pub color: Color,
    /// Inner spacing.
    pub padding: Edges,
    /// Corner radius.
    pub border_radius: f64,
    /// Border color and width, if a border is drawn.
    pub border: Option<(Color, f64)>,
    /// Minimum width.
    pub min_width: f64,
    /// Font size.
    pub font_size: f32,
    /// Drop shadow, if any.
    pub shadow: Option<Shadow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overlay() {
        let base = BoxStyle::default()
            .with_color(Color::WHITE)
            .with_padding(Edges::uniform(5.0));
        let over = BoxStyle::default().with_color(Color::BLACK);

        let merged = base.merged(&over);
        assert_eq!(merged.color, Some(Color::BLACK));
        assert_eq!(merged.padding, Some(Edges::uniform(5.0)));
    }

    #[test]
    fn test_resolve_fallbacks() {
        let resolved = BoxStyle::default().resolve();
        assert_eq!(resolved.background, Color::TRANSPARENT);
        assert_eq!(resolved.padding, Edges::ZERO);
        assert_eq!(resolved.font_size, DEFAULT_FONT_SIZE);
        assert!(resolved.border.is_none());
    }

    #[test]
    fn test_border_needs_color_and_width() {
        let only_color = BoxStyle {
            border_color: Some(Color::WHITE),
            ..Default::default()
        };
        assert!(only_color.resolve().border.is_none());

        let both = BoxStyle::default().with_border(Color::WHITE, 1.0);
        assert_eq!(both.resolve().border, Some((Color::WHITE, 1.0)));
    }

    #[test]
    fn test_edges_sums() {
        let edges = Edges::symmetric(3.0, 5.0);
        assert_eq!(edges.vertical(), 6.0);
        assert_eq!(edges.horizontal(), 10.0);
    }
}
