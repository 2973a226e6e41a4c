// SPDX-License-Identifier: MIT OR Apache-2.0

use layermenu_theme::style::{BoxStyle, ResolvedStyle};

/// A change of hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// The pointer moved onto the box.
    Entered,
    /// The pointer moved off the box.
    Left,
}

/// A box whose style switches while the pointer is over it.
///
/// The hover style is layered on top of the base style, so it only needs to
/// name the fields that change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverBox {
    base: BoxStyle,
    hover: BoxStyle,
    hovered: bool,
}

impl HoverBox {
    /// Create a box that is not hovered.
    pub fn new(base: BoxStyle, hover: BoxStyle) -> Self {
        Self {
            base,
            hover,
            hovered: false,
        }
    }

    /// Update the hover state. Returns the transition, if the state changed.
    pub fn set_hovered(&mut self, hovered: bool) -> Option<HoverTransition> {
        if self.hovered == hovered {
            return None;
        }

        self.hovered = hovered;
        Some(if hovered {
            HoverTransition::Entered
        } else {
            HoverTransition::Left
        })
    }

    /// Whether the pointer is over the box.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The base style, used for geometry.
    pub fn base(&self) -> &BoxStyle {
        &self.base
    }

    /// The effective style.
    pub fn style(&self) -> BoxStyle {
        if self.hovered {
            self.base.merged(&self.hover)
        } else {
            self.base.clone()
        }
    }

    /// The effective style with fallbacks applied.
    pub fn resolved(&self) -> ResolvedStyle {
        self.style().resolve()
    }
}

#[cfg(test)]
mod tests {
    use layermenu_core::vg::peniko::Color;

    use super::*;

    #[test]
    fn test_transitions_only_on_change() {
        let mut hover_box = HoverBox::default();
        assert_eq!(hover_box.set_hovered(false), None);
        assert_eq!(hover_box.set_hovered(true), Some(HoverTransition::Entered));
        assert_eq!(hover_box.set_hovered(true), None);
        assert_eq!(hover_box.set_hovered(false), Some(HoverTransition::Left));
    }

    #[test]
    fn test_hover_layers_on_base() {
        let base = BoxStyle::default()
            .with_color(Color::WHITE)
            .with_border_radius(4.0);
        let hover = BoxStyle::default().with_background(Color::BLACK);
        let mut hover_box = HoverBox::new(base.clone(), hover);

        assert_eq!(hover_box.style(), base);

        hover_box.set_hovered(true);
        let style = hover_box.resolved();
        assert_eq!(style.background, Color::BLACK);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.border_radius, 4.0);
    }
}
