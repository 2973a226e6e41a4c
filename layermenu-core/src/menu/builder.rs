// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::{Point, Rect};

use crate::error::MenuError;
use crate::menu::{Context, MenuEntry, MenuNode};

#[derive(Debug)]
struct BuilderSession {
    anchor: Point,
    entries: Vec<MenuEntry>,
}

/// Collects the entries of one context menu while a right-click is dispatched.
///
/// The builder is either idle or holds exactly one session. A session is
/// started by [begin](MenuBuilder::begin) and consumed by
/// [finalize](MenuBuilder::finalize).
#[derive(Debug, Default)]
pub struct MenuBuilder {
    session: Option<BuilderSession>,
}

impl MenuBuilder {
    /// Create an idle builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session anchored at `anchor`.
    ///
    /// A session that is still collecting entries is discarded.
    pub fn begin(&mut self, anchor: Point) {
        let session = BuilderSession {
            anchor,
            entries: Vec::new(),
        };

        if let Some(stale) = self.session.replace(session) {
            log::warn!(
                "Discarding unfinished context menu at ({}, {}) with {} entries",
                stale.anchor.x,
                stale.anchor.y,
                stale.entries.len()
            );
        } else {
            log::debug!("Context menu session started at ({}, {})", anchor.x, anchor.y);
        }
    }

    /// Start a session, failing if one is already in flight.
    pub fn try_begin(&mut self, anchor: Point) -> Result<(), MenuError> {
        if let Some(session) = &self.session {
            return Err(MenuError::SessionInFlight {
                anchor: session.anchor,
            });
        }

        self.begin(anchor);
        Ok(())
    }

    /// Drop the open session without producing a menu.
    ///
    /// Returns whether a session was open.
    pub fn abandon(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Append an entry to the open session. Does nothing while idle.
    pub fn add_entry(&mut self, entry: MenuEntry) {
        if let Some(session) = &mut self.session {
            session.entries.push(entry);
        }
    }

    /// Consume the open session and return its menu.
    ///
    /// Returns [None] while idle. The builder is idle afterwards.
    pub fn finalize(&mut self) -> Option<MenuNode> {
        let session = self.session.take()?;
        log::debug!(
            "Context menu session finalized with {} entries",
            session.entries.len()
        );

        Some(MenuNode::new(session.anchor, session.entries))
    }

    /// Remove the entries collected so far, keeping the session open.
    pub fn take_entries(&mut self) -> Vec<MenuEntry> {
        self.session
            .as_mut()
            .map(|session| std::mem::take(&mut session.entries))
            .unwrap_or_default()
    }

    /// Whether a session is collecting entries.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Anchor of the open session.
    pub fn anchor(&self) -> Option<Point> {
        self.session.as_ref().map(|session| session.anchor)
    }

    /// Number of entries collected so far.
    pub fn entry_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.entries.len())
    }
}

/// The view of a [MenuBuilder] handed to layers while entries are collected.
///
/// A layer can only append entries. Starting and finishing the session is
/// left to the composition root.
pub struct ContextRequest<'a> {
    position: Point,
    viewport: Rect,
    builder: &'a mut MenuBuilder,
}

impl<'a> ContextRequest<'a> {
    /// Create a request for a right-click at `position`.
    pub fn new(position: Point, viewport: Rect, builder: &'a mut MenuBuilder) -> Self {
        Self {
            position,
            viewport,
            builder,
        }
    }

    /// Where the right-click happened.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The area the layers are laid out in.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Append an entry to the menu being built.
    pub fn add_entry(&mut self, entry: MenuEntry) {
        self.builder.add_entry(entry);
    }

    /// Number of entries contributed so far, by any layer.
    pub fn entry_count(&self) -> usize {
        self.builder.entry_count()
    }

    /// Move the entries added through [Context] since the last call into
    /// this request, in the order they were added.
    ///
    /// Returns how many entries were moved.
    pub fn absorb_context_entries(&mut self) -> usize {
        let entries = Context::take_entries();
        let count = entries.len();
        for entry in entries {
            self.builder.add_entry(entry);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::EntryKind;

    #[test]
    fn test_session_lifecycle() {
        let mut builder = MenuBuilder::new();
        assert!(!builder.is_open());

        builder.begin(Point::new(5.0, 6.0));
        assert!(builder.is_open());
        assert_eq!(builder.anchor(), Some(Point::new(5.0, 6.0)));

        builder.add_entry(MenuEntry::label("a"));
        builder.add_entry(MenuEntry::spacer());
        assert_eq!(builder.entry_count(), 2);

        let node = builder.finalize().unwrap();
        let kinds: Vec<_> = node.entries().iter().map(MenuEntry::kind).collect();
        assert_eq!(kinds, vec![EntryKind::Label, EntryKind::Spacer]);
        assert_eq!(node.anchor(), Point::new(5.0, 6.0));

        assert!(!builder.is_open());
        assert!(builder.finalize().is_none());
    }

    #[test]
    fn test_add_entry_while_idle_is_ignored() {
        let mut builder = MenuBuilder::new();
        builder.add_entry(MenuEntry::label("lost"));
        assert_eq!(builder.entry_count(), 0);

        builder.begin(Point::ZERO);
        assert_eq!(builder.entry_count(), 0);
    }

    #[test]
    fn test_begin_discards_stale_session() {
        let mut builder = MenuBuilder::new();
        builder.begin(Point::new(1.0, 1.0));
        builder.add_entry(MenuEntry::label("stale"));

        builder.begin(Point::new(2.0, 2.0));
        let node = builder.finalize().unwrap();
        assert!(node.is_empty());
        assert_eq!(node.anchor(), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_try_begin_rejects_open_session() {
        let mut builder = MenuBuilder::new();
        builder.try_begin(Point::new(1.0, 2.0)).unwrap();
        builder.add_entry(MenuEntry::spacer());

        let err = builder.try_begin(Point::new(3.0, 4.0)).unwrap_err();
        assert_eq!(
            err,
            MenuError::SessionInFlight {
                anchor: Point::new(1.0, 2.0)
            }
        );
        assert_eq!(builder.entry_count(), 1);

        assert!(builder.abandon());
        assert!(!builder.abandon());
        assert!(builder.try_begin(Point::new(3.0, 4.0)).is_ok());
    }

    #[test]
    fn test_request_appends_to_session() {
        let mut builder = MenuBuilder::new();
        builder.begin(Point::new(7.0, 8.0));

        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut request = ContextRequest::new(Point::new(7.0, 8.0), viewport, &mut builder);
        request.add_entry(MenuEntry::label("one"));
        request.add_entry(MenuEntry::label("two"));
        assert_eq!(request.entry_count(), 2);
        assert_eq!(request.position(), Point::new(7.0, 8.0));
        assert_eq!(request.viewport(), viewport);

        assert_eq!(builder.finalize().map(|node| node.len()), Some(2));
    }

    #[test]
    fn test_take_entries_keeps_session() {
        let mut builder = MenuBuilder::new();
        assert!(builder.take_entries().is_empty());

        builder.begin(Point::ZERO);
        builder.add_entry(MenuEntry::label("moved"));
        assert_eq!(builder.take_entries().len(), 1);
        assert!(builder.is_open());
        assert_eq!(builder.entry_count(), 0);
    }

    #[test]
    fn test_request_absorbs_context_entries() {
        let mut builder = MenuBuilder::new();
        builder.begin(Point::ZERO);
        Context::create(0.0, 0.0);

        let mut request = ContextRequest::new(Point::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0), &mut builder);
        request.add_entry(MenuEntry::label("direct"));
        Context::add_entry(MenuEntry::label("global"));
        assert_eq!(request.absorb_context_entries(), 1);
        assert_eq!(request.absorb_context_entries(), 0);
        assert!(Context::abandon());

        let texts: Vec<_> = builder
            .finalize()
            .unwrap()
            .entries()
            .iter()
            .filter_map(MenuEntry::text)
            .map(str::to_string)
            .collect();
        assert_eq!(texts, vec!["direct", "global"]);
    }
}
