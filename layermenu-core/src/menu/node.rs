// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::Point;

use crate::menu::MenuEntry;

/// An immutable menu: an anchor plus its ordered entries.
///
/// The anchor of a root node is absolute. The anchor of a submenu node is
/// relative to the origin of its parent panel.
#[derive(Debug, Clone)]
pub struct MenuNode {
    anchor: Point,
    entries: Vec<MenuEntry>,
}

impl MenuNode {
    /// Create a node from its anchor and entries.
    pub fn new(anchor: Point, entries: Vec<MenuEntry>) -> Self {
        Self { anchor, entries }
    }

    /// Build the node of a nested menu from a submenu entry.
    ///
    /// Returns [None] if `entry` is not a [MenuEntry::Submenu].
    pub fn submenu_of(entry: &MenuEntry, anchor: Point) -> Option<Self> {
        match entry {
            MenuEntry::Submenu { children, .. } => Some(Self::new(anchor, children.clone())),
            _ => None,
        }
    }

    /// Where the menu is anchored.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The entries in rendering order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::EntryKind;

    #[test]
    fn test_submenu_of_copies_children() {
        let entry = MenuEntry::submenu("More", [MenuEntry::label("a"), MenuEntry::spacer()]);
        let node = MenuNode::submenu_of(&entry, Point::new(120.0, 28.0)).unwrap();

        assert_eq!(node.anchor(), Point::new(120.0, 28.0));
        assert_eq!(node.len(), 2);
        assert_eq!(node.entry(1).map(MenuEntry::kind), Some(EntryKind::Spacer));
    }

    #[test]
    fn test_submenu_of_rejects_other_kinds() {
        assert!(MenuNode::submenu_of(&MenuEntry::label("a"), Point::ZERO).is_none());
        assert!(MenuNode::submenu_of(&MenuEntry::spacer(), Point::ZERO).is_none());
    }

    #[test]
    fn test_empty_node() {
        let node = MenuNode::new(Point::ZERO, Vec::new());
        assert!(node.is_empty());
        assert!(node.entry(0).is_none());
    }
}
