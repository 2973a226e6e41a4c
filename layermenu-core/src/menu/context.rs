// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::RefCell;

use vello::kurbo::Point;

use crate::menu::{MenuBuilder, MenuEntry, MenuNode};

thread_local! {
    static CURRENT: RefCell<MenuBuilder> = RefCell::new(MenuBuilder::new());
}

/// A per-thread [MenuBuilder] for code that cannot be handed one.
///
/// Event dispatch happens on a single thread, so at most one session is in
/// flight per thread. While a right-click is dispatched, entries added here
/// end up in the same menu as those added through a
/// [ContextRequest](crate::menu::ContextRequest).
pub struct Context;

impl Context {
    /// Start a session at `(x, y)`. See [MenuBuilder::begin].
    pub fn create(x: f64, y: f64) {
        CURRENT.with_borrow_mut(|builder| builder.begin(Point::new(x, y)));
    }

    /// Append an entry to the open session. See [MenuBuilder::add_entry].
    pub fn add_entry(entry: MenuEntry) {
        CURRENT.with_borrow_mut(|builder| builder.add_entry(entry));
    }

    /// Finish the open session. See [MenuBuilder::finalize].
    pub fn finalize() -> Option<MenuNode> {
        CURRENT.with_borrow_mut(MenuBuilder::finalize)
    }

    /// Remove the entries added so far, keeping the session open. See
    /// [MenuBuilder::take_entries].
    pub fn take_entries() -> Vec<MenuEntry> {
        CURRENT.with_borrow_mut(MenuBuilder::take_entries)
    }

    /// Drop the open session. See [MenuBuilder::abandon].
    pub fn abandon() -> bool {
        CURRENT.with_borrow_mut(MenuBuilder::abandon)
    }

    /// Whether a session is open on this thread.
    pub fn is_open() -> bool {
        CURRENT.with_borrow(MenuBuilder::is_open)
    }
}
