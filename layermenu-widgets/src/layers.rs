// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Menu Layers
//!
//! A right-click runs through three layers of a
//! [MultilayerWithContext](crate::multilayer::MultilayerWithContext):
//!
//! 1. [CaptureLayer] sits on top and sees the click first. It starts a menu
//!    session at the cursor.
//! 2. The application layers under the cursor contribute entries.
//! 3. [NotifierLayer] sits at the bottom and sees the click last. It finishes
//!    the session and reports the menu to open.
//!
//! The open menu itself is drawn by a [DrawLayer].

use layermenu_core::layer::LayerId;
use layermenu_core::menu::{Context, MenuBuilder, MenuNode};
use layermenu_core::text::{TextMeasure, TextRenderer};
use layermenu_core::update::Update;
use layermenu_core::vg::kurbo::{Point, Size};
use layermenu_core::vgi::Graphics;
use layermenu_theme::menu::MenuStyles;

use crate::menu_view::{ClickOutcome, MenuView};
use crate::multilayer::MenuVisibility;

/// Starts a menu session before any application layer sees a right-click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureLayer {
    id: LayerId,
}

impl CaptureLayer {
    /// Create the capture layer of the composition `owner`.
    pub fn new(owner: &LayerId) -> Self {
        Self {
            id: LayerId::new(format!("{}-capture", owner)),
        }
    }

    /// The identifier of this layer.
    pub fn id(&self) -> &LayerId {
        &self.id
    }

    /// Begin a session anchored at `position`, on `builder` and on the
    /// thread's [Context].
    ///
    /// A session left over from an interrupted dispatch is dropped first.
    pub fn on_context_menu(&self, builder: &mut MenuBuilder, position: Point) {
        if let Err(err) = builder.try_begin(position) {
            log::warn!("{}: {}, starting over", self.id, err);
            builder.abandon();
            builder.begin(position);
        }

        if Context::abandon() {
            log::warn!("{}: dropping a context session nobody finalized", self.id);
        }
        Context::create(position.x, position.y);
    }

    /// Close the open menu on a primary click. Returns the layer that showed
    /// it, if any.
    pub fn on_primary_click(&self, menu: &mut MenuVisibility) -> Option<DrawLayer> {
        match std::mem::replace(menu, MenuVisibility::Closed) {
            MenuVisibility::Open(layer) => {
                log::debug!("{}: primary click closes the context menu", self.id);
                Some(layer)
            },
            MenuVisibility::Closed => None,
        }
    }
}

/// What the notifier decided after a right-click.
#[derive(Debug)]
pub enum Notification {
    /// Show this menu, replacing any open one.
    Open(MenuNode),
    /// Nothing was contributed. Close any open menu.
    Suppressed,
    /// No session was in flight.
    Idle,
}

/// Finishes the menu session after every application layer contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierLayer {
    id: LayerId,
}

impl NotifierLayer {
    /// Create the notifier layer of the composition `owner`.
    pub fn new(owner: &LayerId) -> Self {
        Self {
            id: LayerId::new(format!("{}-notifier", owner)),
        }
    }

    /// The identifier of this layer.
    pub fn id(&self) -> &LayerId {
        &self.id
    }

    /// Finalize the session.
    ///
    /// Entries still pending on the thread's [Context] are appended first and
    /// its session is closed. With `suppress_empty`, a menu without entries is
    /// reported as [Notification::Suppressed] instead of being opened.
    pub fn on_context_menu(&self, builder: &mut MenuBuilder, suppress_empty: bool) -> Notification {
        for entry in Context::take_entries() {
            builder.add_entry(entry);
        }
        Context::abandon();

        match builder.finalize() {
            Some(node) if node.is_empty() && suppress_empty => {
                log::debug!("{}: no entries contributed, suppressing menu", self.id);
                Notification::Suppressed
            },
            Some(node) => Notification::Open(node),
            None => Notification::Idle,
        }
    }
}

/// Owns and draws the open menu.
pub struct DrawLayer {
    view: MenuView,
}

impl DrawLayer {
    /// Create a layer showing `node` as a root menu.
    pub fn new(node: MenuNode) -> Self {
        Self {
            view: MenuView::new(node, None),
        }
    }

    /// The root menu view.
    pub fn view(&self) -> &MenuView {
        &self.view
    }

    /// The root menu.
    pub fn root(&self) -> &MenuNode {
        self.view.node()
    }

    /// See [MenuView::layout].
    pub fn layout(&mut self, text: &mut dyn TextMeasure, styles: &MenuStyles, viewport: Size) {
        self.view.layout(text, styles, viewport);
    }

    /// See [MenuView::reset_placement].
    pub fn reset_placement(&mut self) {
        self.view.reset_placement();
    }

    /// See [MenuView::render].
    pub fn render(&self, graphics: &mut dyn Graphics, text: &mut dyn TextRenderer) {
        self.view.render(graphics, text);
    }

    /// See [MenuView::pointer_moved].
    pub fn pointer_moved(&mut self, cursor: Point) -> Update {
        self.view.pointer_moved(cursor)
    }

    /// See [MenuView::pointer_left].
    pub fn pointer_left(&mut self) -> Update {
        self.view.pointer_left()
    }

    /// See [MenuView::click].
    pub fn click(&self, cursor: Point) -> ClickOutcome {
        self.view.click(cursor)
    }

    /// See [MenuView::contains].
    pub fn contains(&self, cursor: Point) -> bool {
        self.view.contains(cursor)
    }
}

#[cfg(test)]
mod tests {
    use layermenu_core::menu::MenuEntry;

    use super::*;

    fn owner() -> LayerId {
        LayerId::from("root")
    }

    #[test]
    fn test_layer_ids() {
        assert_eq!(CaptureLayer::new(&owner()).id().as_str(), "root-capture");
        assert_eq!(NotifierLayer::new(&owner()).id().as_str(), "root-notifier");
    }

    #[test]
    fn test_capture_recovers_stale_session() {
        let capture = CaptureLayer::new(&owner());
        let mut builder = MenuBuilder::new();
        builder.begin(Point::new(1.0, 1.0));
        builder.add_entry(MenuEntry::label("stale"));

        capture.on_context_menu(&mut builder, Point::new(5.0, 5.0));
        assert_eq!(builder.anchor(), Some(Point::new(5.0, 5.0)));
        assert_eq!(builder.entry_count(), 0);
    }

    #[test]
    fn test_notifier_outcomes() {
        let notifier = NotifierLayer::new(&owner());
        let mut builder = MenuBuilder::new();

        assert!(matches!(notifier.on_context_menu(&mut builder, true), Notification::Idle));

        builder.begin(Point::ZERO);
        assert!(matches!(notifier.on_context_menu(&mut builder, true), Notification::Suppressed));

        builder.begin(Point::ZERO);
        match notifier.on_context_menu(&mut builder, false) {
            Notification::Open(node) => assert!(node.is_empty()),
            other => panic!("expected an empty menu, got {:?}", other),
        }

        builder.begin(Point::ZERO);
        builder.add_entry(MenuEntry::spacer());
        assert!(matches!(notifier.on_context_menu(&mut builder, true), Notification::Open(_)));
        assert!(!builder.is_open());
    }

    #[test]
    fn test_primary_click_closes_only_open_menus() {
        let capture = CaptureLayer::new(&owner());
        let mut menu = MenuVisibility::Open(DrawLayer::new(MenuNode::new(Point::ZERO, Vec::new())));

        assert!(capture.on_primary_click(&mut menu).is_some());
        assert!(matches!(menu, MenuVisibility::Closed));
        assert!(capture.on_primary_click(&mut menu).is_none());
    }

    #[test]
    fn test_context_session_follows_the_right_click() {
        let capture = CaptureLayer::new(&owner());
        let notifier = NotifierLayer::new(&owner());
        let mut builder = MenuBuilder::new();

        capture.on_context_menu(&mut builder, Point::new(4.0, 2.0));
        assert!(Context::is_open());
        builder.add_entry(MenuEntry::label("direct"));
        Context::add_entry(MenuEntry::label("global"));

        match notifier.on_context_menu(&mut builder, true) {
            Notification::Open(node) => {
                let texts: Vec<_> = node.entries().iter().filter_map(MenuEntry::text).collect();
                assert_eq!(texts, vec!["direct", "global"]);
                assert_eq!(node.anchor(), Point::new(4.0, 2.0));
            },
            other => panic!("expected a menu, got {:?}", other),
        }
        assert!(!Context::is_open());
    }
}
