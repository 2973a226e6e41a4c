// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::{Point, Size};
use vello::peniko::Brush;

use layermenu_theme::style::DEFAULT_FONT_SIZE;

use crate::vgi::Graphics;

/// Measures text before it is drawn.
pub trait TextMeasure {
    /// Size of `text` set in a single line at `font_size`.
    fn measure(&mut self, text: &str, font_size: f32) -> Size;
}

/// Draws text measured by the same [TextMeasure].
pub trait TextRenderer: TextMeasure {
    /// Draw `text` with its top-left corner at `origin`.
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        font_size: f32,
        brush: &Brush,
        origin: Point,
    );
}

/// Fixed-advance text measurement.
///
/// Every character is `char_width` wide and lines are `line_height` tall at
/// [DEFAULT_FONT_SIZE]. Other sizes scale linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthMeasure {
    char_width: f64,
    line_height: f64,
}

impl CharWidthMeasure {
    /// Create a measurer with the given advance and line height.
    pub const fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for CharWidthMeasure {
    fn default() -> Self {
        Self::new(7.0, 17.0)
    }
}

impl TextMeasure for CharWidthMeasure {
    fn measure(&mut self, text: &str, font_size: f32) -> Size {
        let scale = f64::from(font_size / DEFAULT_FONT_SIZE);
        Size::new(
            text.chars().count() as f64 * self.char_width * scale,
            self.line_height * scale,
        )
    }
}
