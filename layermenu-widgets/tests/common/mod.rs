// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use layermenu_core::config::MenuConfig;
use layermenu_core::event::PointerEvent;
use layermenu_core::text::{CharWidthMeasure, TextMeasure, TextRenderer};
use layermenu_core::vg::kurbo::{Point, Size};
use layermenu_core::vg::peniko::Brush;
use layermenu_core::vgi::Graphics;
use layermenu_core::window::MouseButton;
use layermenu_theme::menu::MenuStyles;

/// Text backend that measures 10px per character and remembers what it drew.
pub struct RecordingText {
    measure: CharWidthMeasure,
    pub drawn: Vec<(String, Point)>,
}

impl RecordingText {
    pub fn new() -> Self {
        Self {
            measure: CharWidthMeasure::new(10.0, 14.0),
            drawn: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.drawn.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl TextMeasure for RecordingText {
    fn measure(&mut self, text: &str, font_size: f32) -> Size {
        self.measure.measure(text, font_size)
    }
}

impl TextRenderer for RecordingText {
    fn render(
        &mut self,
        _graphics: &mut dyn Graphics,
        text: &str,
        _font_size: f32,
        _brush: &Brush,
        origin: Point,
    ) {
        self.drawn.push((text.to_string(), origin));
    }
}

pub fn config(width: f64, height: f64) -> MenuConfig {
    MenuConfig {
        viewport: Size::new(width, height),
        suppress_empty: true,
        styles: MenuStyles::default(),
    }
}

pub fn right(x: f64, y: f64) -> PointerEvent {
    PointerEvent::pressed(MouseButton::Right, x, y)
}

pub fn left(x: f64, y: f64) -> PointerEvent {
    PointerEvent::pressed(MouseButton::Left, x, y)
}
