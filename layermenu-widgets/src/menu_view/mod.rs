// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Menu View
//!
//! [MenuView] draws one [MenuNode] as a panel and mounts nested panels for
//! hovered submenu rows.
//!
//! A view is laid out in two passes. [layout](MenuView::layout) first measures
//! the rows while the panel is hidden, then commits a viewport-aware origin
//! and the panel becomes visible. Pointer moves never re-run placement.
//!
//! A submenu row is hovered while the cursor is over the row itself or over
//! any panel of its expanded subtree. Rectangles are half-open, so the pixel
//! column where a row ends and its submenu begins belongs to the submenu and
//! the pointer can cross over without the submenu collapsing.
//!
//! Submenus are drawn above their parent panel. While an expanded subtree
//! covers the cursor, the other rows of that panel are not hovered and do not
//! receive clicks.

use std::fmt;

use layermenu_core::menu::{Callback, MenuEntry, MenuNode};
use layermenu_core::placement::{Placement, PlacementRequest};
use layermenu_core::text::{TextMeasure, TextRenderer};
use layermenu_core::update::Update;
use layermenu_core::vg::kurbo::{Point, Rect, Size};
use layermenu_core::vgi::Graphics;
use layermenu_theme::menu::MenuStyles;

use crate::hover_box::HoverBox;

/// Geometry constants.
pub mod constants;
mod rendering;
mod row;

pub use row::{EntryRow, SubmenuState};

/// Where the panel that opened a submenu sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// Absolute origin of the parent panel.
    pub origin: Point,
    /// Size of the row that opened the submenu.
    pub trigger: Size,
}

/// What a primary click hit.
#[derive(Clone)]
pub enum ClickOutcome {
    /// A button row. Its callback should run.
    Activated(Callback),
    /// A panel, but no button.
    Inside,
    /// Nothing in this menu.
    Outside,
}

impl fmt::Debug for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activated(_) => f.write_str("Activated(..)"),
            Self::Inside => f.write_str("Inside"),
            Self::Outside => f.write_str("Outside"),
        }
    }
}

/// A menu panel and its mounted submenus.
pub struct MenuView {
    node: MenuNode,
    parent: Option<ParentFrame>,
    placement: Placement,
    panel: HoverBox,
    rows: Vec<EntryRow>,
    size: Option<Size>,
}

impl MenuView {
    /// Create a hidden view of `node`.
    ///
    /// `parent` is [None] for a root menu, whose anchor is absolute.
    pub fn new(node: MenuNode, parent: Option<ParentFrame>) -> Self {
        Self {
            placement: Placement::new(node.anchor()),
            node,
            parent,
            panel: HoverBox::default(),
            rows: Vec::new(),
            size: None,
        }
    }

    /// The menu shown by this view.
    pub fn node(&self) -> &MenuNode {
        &self.node
    }

    /// The placement state of the panel.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The panel rectangle in viewport coordinates, once placed.
    pub fn rect(&self) -> Option<Rect> {
        self.placement.rect()
    }

    /// The measured rows.
    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    /// Whether the pointer is over the panel or one of its mounted submenus.
    pub fn is_hovered(&self) -> bool {
        self.panel.is_hovered()
    }

    /// The first mounted submenu, if any.
    pub fn expanded(&self) -> Option<&MenuView> {
        self.rows.iter().find_map(|row| row.submenu.view())
    }

    /// Measure the panel and commit its placement, then lay out mounted
    /// submenus. A view without entries is left untouched.
    pub fn layout(&mut self, text: &mut dyn TextMeasure, styles: &MenuStyles, viewport: Size) {
        if self.node.is_empty() {
            return;
        }

        let size = match self.size {
            Some(size) => size,
            None => self.measure(text, styles),
        };

        let request = match self.parent {
            Some(frame) => PlacementRequest::nested(
                self.placement.anchor(),
                size,
                frame.origin,
                frame.trigger,
            ),
            None => PlacementRequest::root(self.placement.anchor(), size),
        };
        self.placement.commit(&request, viewport);

        let Some(origin) = self.placement.absolute() else {
            return;
        };

        for row in &mut self.rows {
            let trigger = row.rect.size();
            if let Some(child) = row.submenu.view_mut() {
                child.parent = Some(ParentFrame { origin, trigger });
                child.layout(text, styles, viewport);
            }
        }
    }

    fn measure(&mut self, text: &mut dyn TextMeasure, styles: &MenuStyles) -> Size {
        self.panel = HoverBox::new(styles.panel_style(), styles.panel_hover_style());
        let panel = self.panel.base().resolve();
        let padding = panel.padding;

        let mut top = padding.top;
        let mut content_width = panel.min_width;
        self.rows = self
            .node
            .entries()
            .iter()
            .map(|entry| {
                let row = row::EntryRow::measure(entry.clone(), padding.left, top, text, styles);
                top = row.rect.y1;
                content_width = content_width.max(row.rect.width());
                row
            })
            .collect();

        for row in &mut self.rows {
            row.stretch_to(padding.left, padding.left + content_width);
        }

        let size = Size::new(
            content_width + padding.horizontal(),
            top + padding.bottom,
        );
        self.size = Some(size);
        size
    }

    /// Forget the committed placement of this panel and its submenus.
    ///
    /// The next [layout](MenuView::layout) places them again.
    pub fn reset_placement(&mut self) {
        self.placement.reset();
        for row in &mut self.rows {
            if let Some(child) = row.submenu.view_mut() {
                child.reset_placement();
            }
        }
    }

    /// Whether `cursor` is over the panel or any mounted submenu.
    pub fn contains(&self, cursor: Point) -> bool {
        self.rect().is_some_and(|rect| rect.contains(cursor))
            || self
                .rows
                .iter()
                .filter_map(|row| row.submenu.view())
                .any(|child| child.contains(cursor))
    }

    /// Update hover state and mount or unmount submenus.
    ///
    /// Returns [Update::LAYOUT] when a submenu was mounted and still needs to
    /// be laid out.
    pub fn pointer_moved(&mut self, cursor: Point) -> Update {
        let Some(origin) = self.placement.absolute() else {
            return Update::empty();
        };

        // Submenus are painted above this panel, later rows above earlier
        // ones. An expanded subtree under the cursor hides every other row.
        let covering = self
            .rows
            .iter()
            .rposition(|row| row.submenu.view().is_some_and(|child| child.contains(cursor)));

        let mut update = Update::empty();
        let over_panel = covering.is_some() || self.rect().is_some_and(|rect| rect.contains(cursor));
        if self.panel.set_hovered(over_panel).is_some() {
            update |= Update::DRAW;
        }

        for (index, row) in self.rows.iter_mut().enumerate() {
            if !row.entry.is_interactive() {
                continue;
            }

            let hovered = match covering {
                Some(covering) => covering == index,
                None => row.absolute_rect(origin).contains(cursor),
            };

            if row.style.set_hovered(hovered).is_some() {
                update |= Update::DRAW;
            }

            if !matches!(row.entry, MenuEntry::Submenu { .. }) {
                continue;
            }

            match (hovered, row.submenu.view_mut()) {
                (true, Some(child)) => {
                    update |= child.pointer_moved(cursor);
                },
                (true, None) => {
                    if let Some(node) = MenuNode::submenu_of(&row.entry, row.submenu_anchor()) {
                        log::debug!(
                            "Expanding submenu {:?} with {} entries",
                            row.entry.text().unwrap_or_default(),
                            node.len()
                        );
                        let frame = ParentFrame {
                            origin,
                            trigger: row.rect.size(),
                        };
                        row.submenu = SubmenuState::Expanded(Box::new(MenuView::new(node, Some(frame))));
                        update |= Update::LAYOUT | Update::DRAW;
                    }
                },
                (false, Some(_)) => {
                    log::debug!(
                        "Collapsing submenu {:?}",
                        row.entry.text().unwrap_or_default()
                    );
                    row.submenu = SubmenuState::Collapsed;
                    update |= Update::DRAW;
                },
                (false, None) => {},
            }
        }

        update
    }

    /// Drop every hover state and unmount all submenus.
    pub fn pointer_left(&mut self) -> Update {
        let mut update = Update::empty();
        if self.panel.set_hovered(false).is_some() {
            update |= Update::DRAW;
        }

        for row in &mut self.rows {
            if row.style.set_hovered(false).is_some() {
                update |= Update::DRAW;
            }
            if row.submenu.view().is_some() {
                row.submenu = SubmenuState::Collapsed;
                update |= Update::DRAW;
            }
        }

        update
    }

    /// Find what a primary click at `cursor` hits, topmost panel first.
    pub fn click(&self, cursor: Point) -> ClickOutcome {
        for child in self.rows.iter().rev().filter_map(|row| row.submenu.view()) {
            match child.click(cursor) {
                ClickOutcome::Outside => {},
                outcome => return outcome,
            }
        }

        let (Some(rect), Some(origin)) = (self.rect(), self.placement.absolute()) else {
            return ClickOutcome::Outside;
        };
        if !rect.contains(cursor) {
            return ClickOutcome::Outside;
        }

        self.rows
            .iter()
            .find(|row| row.absolute_rect(origin).contains(cursor))
            .and_then(|row| row.entry.callback())
            .map_or(ClickOutcome::Inside, |callback| {
                ClickOutcome::Activated(callback.clone())
            })
    }

    /// Draw the panel and its mounted submenus. Nothing is drawn while the
    /// panel is still being measured.
    pub fn render(&self, graphics: &mut dyn Graphics, text: &mut dyn TextRenderer) {
        let (Some(rect), Some(origin)) = (self.rect(), self.placement.absolute()) else {
            return;
        };

        rendering::render_panel(graphics, rect, &self.panel.resolved());

        for row in &self.rows {
            rendering::render_row(graphics, text, row, origin);
        }

        for child in self.rows.iter().filter_map(|row| row.submenu.view()) {
            child.render(graphics, text);
        }
    }
}
