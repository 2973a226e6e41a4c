// SPDX-License-Identifier: MIT OR Apache-2.0

use layermenu_core::menu::{EntryKind, MenuEntry};
use layermenu_core::text::TextMeasure;
use layermenu_core::vg::kurbo::{Point, Rect, Size};
use layermenu_theme::menu::MenuStyles;
use layermenu_theme::style::BoxStyle;

use super::constants::{SPACER_HEIGHT, SPACER_MARGIN};
use super::MenuView;
use crate::hover_box::HoverBox;

/// Whether a submenu row has its nested menu mounted.
pub enum SubmenuState {
    /// Nothing mounted.
    Collapsed,
    /// The nested menu is mounted while the row or the menu itself is hovered.
    Expanded(Box<MenuView>),
}

impl SubmenuState {
    /// The mounted menu, if any.
    pub fn view(&self) -> Option<&MenuView> {
        match self {
            Self::Expanded(view) => Some(view),
            Self::Collapsed => None,
        }
    }

    pub(crate) fn view_mut(&mut self) -> Option<&mut MenuView> {
        match self {
            Self::Expanded(view) => Some(view),
            Self::Collapsed => None,
        }
    }
}

/// A measured row of a menu panel.
pub struct EntryRow {
    pub(crate) entry: MenuEntry,
    pub(crate) rect: Rect,
    pub(crate) style: HoverBox,
    pub(crate) submenu: SubmenuState,
}

impl EntryRow {
    /// Measure `entry` and place it at `top` inside a panel.
    ///
    /// The row starts at `left` and is as wide as its content. The panel
    /// stretches it once every row is measured.
    pub(crate) fn measure(
        entry: MenuEntry,
        left: f64,
        top: f64,
        text: &mut dyn TextMeasure,
        styles: &MenuStyles,
    ) -> Self {
        let style = row_style(entry.kind(), styles);
        let size = match entry.text() {
            Some(label) => {
                let resolved = style.base().resolve();
                let text_size = text.measure(label, resolved.font_size);
                Size::new(
                    text_size.width + resolved.padding.horizontal(),
                    text_size.height + resolved.padding.vertical(),
                )
            },
            None => Size::new(SPACER_MARGIN * 2.0, SPACER_HEIGHT),
        };

        Self {
            entry,
            rect: Rect::from_origin_size(Point::new(left, top), size),
            style,
            submenu: SubmenuState::Collapsed,
        }
    }

    /// The entry shown by this row.
    pub fn entry(&self) -> &MenuEntry {
        &self.entry
    }

    /// The row rectangle, relative to the panel origin.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The row rectangle in viewport coordinates.
    pub(crate) fn absolute_rect(&self, panel_origin: Point) -> Rect {
        self.rect + panel_origin.to_vec2()
    }

    /// Whether the row is drawn with its hover style.
    pub fn is_hovered(&self) -> bool {
        self.style.is_hovered()
    }

    /// The submenu state. Always collapsed for rows that are not submenus.
    pub fn submenu(&self) -> &SubmenuState {
        &self.submenu
    }

    /// Where a nested menu opened by this row is anchored, relative to the panel.
    pub(crate) fn submenu_anchor(&self) -> Point {
        Point::new(self.rect.width(), self.rect.y0)
    }

    pub(crate) fn stretch_to(&mut self, left: f64, right: f64) {
        self.rect = Rect::new(left, self.rect.y0, right, self.rect.y1);
    }
}

fn row_style(kind: EntryKind, styles: &MenuStyles) -> HoverBox {
    match kind {
        EntryKind::Label => HoverBox::new(styles.label_style(), BoxStyle::default()),
        EntryKind::Button => HoverBox::new(styles.button_style(), styles.button_hover_style()),
        EntryKind::Submenu => HoverBox::new(styles.submenu_style(), styles.submenu_hover_style()),
        EntryKind::Spacer => HoverBox::default(),
    }
}
