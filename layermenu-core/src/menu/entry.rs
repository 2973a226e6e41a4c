// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;

use crate::update::Update;

/// Action run when a button entry is activated.
pub type Callback = Arc<dyn Fn() -> Update + Send + Sync>;

/// One row of a context menu.
///
/// Entries carry no identity beyond their position in the menu.
#[derive(Clone)]
pub enum MenuEntry {
    /// Non-interactive, dimmed text.
    Label(String),
    /// Horizontal rule separating groups of entries.
    Spacer,
    /// Clickable text that runs `on_activate`.
    Button {
        /// Text shown on the row.
        label: String,
        /// Action run on a primary click.
        on_activate: Callback,
    },
    /// Row that opens a nested menu while hovered.
    Submenu {
        /// Text shown on the row.
        label: String,
        /// Entries of the nested menu.
        children: Vec<MenuEntry>,
    },
}

/// Discriminator of a [MenuEntry].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// See [MenuEntry::Label].
    Label,
    /// See [MenuEntry::Spacer].
    Spacer,
    /// See [MenuEntry::Button].
    Button,
    /// See [MenuEntry::Submenu].
    Submenu,
}

impl MenuEntry {
    /// Create a label entry.
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Create a spacer entry.
    pub fn spacer() -> Self {
        Self::Spacer
    }

    /// Create a button entry running `on_activate` when clicked.
    pub fn button<F>(label: impl Into<String>, on_activate: F) -> Self
    where
        F: Fn() -> Update + Send + Sync + 'static,
    {
        Self::Button {
            label: label.into(),
            on_activate: Arc::new(on_activate),
        }
    }

    /// Create a submenu entry.
    pub fn submenu(label: impl Into<String>, children: impl IntoIterator<Item = MenuEntry>) -> Self {
        Self::Submenu {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Append a child to a submenu entry. Other kinds are returned unchanged.
    pub fn with_child(mut self, child: MenuEntry) -> Self {
        match &mut self {
            Self::Submenu { children, .. } => children.push(child),
            other => log::warn!("Ignoring child added to a {:?} entry", other.kind()),
        }
        self
    }

    /// The kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Label(_) => EntryKind::Label,
            Self::Spacer => EntryKind::Spacer,
            Self::Button { .. } => EntryKind::Button,
            Self::Submenu { .. } => EntryKind::Submenu,
        }
    }

    /// The text shown on the row, if the entry has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Label(text) => Some(text),
            Self::Button { label, .. } | Self::Submenu { label, .. } => Some(label),
            Self::Spacer => None,
        }
    }

    /// Whether the row reacts to hover.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Button { .. } | Self::Submenu { .. })
    }

    /// Children of a submenu entry. Empty for every other kind.
    pub fn children(&self) -> &[MenuEntry] {
        match self {
            Self::Submenu { children, .. } => children,
            _ => &[],
        }
    }

    /// The callback of a button entry.
    pub fn callback(&self) -> Option<&Callback> {
        match self {
            Self::Button { on_activate, .. } => Some(on_activate),
            _ => None,
        }
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(text) => f.debug_tuple("Label").field(text).finish(),
            Self::Spacer => f.write_str("Spacer"),
            Self::Button { label, .. } => f
                .debug_struct("Button")
                .field("label", label)
                .finish_non_exhaustive(),
            Self::Submenu { label, children } => f
                .debug_struct("Submenu")
                .field("label", label)
                .field("children", children)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_text() {
        assert_eq!(MenuEntry::label("a").kind(), EntryKind::Label);
        assert_eq!(MenuEntry::spacer().kind(), EntryKind::Spacer);
        assert_eq!(MenuEntry::spacer().text(), None);

        let button = MenuEntry::button("Copy", || Update::DRAW);
        assert_eq!(button.kind(), EntryKind::Button);
        assert_eq!(button.text(), Some("Copy"));
        assert!(button.is_interactive());
        assert!(!MenuEntry::label("a").is_interactive());
    }

    #[test]
    fn test_button_callback_runs() {
        let button = MenuEntry::button("Go", || Update::DRAW | Update::LAYOUT);
        let callback = button.callback().unwrap();
        assert_eq!(callback(), Update::DRAW | Update::LAYOUT);
        assert!(MenuEntry::label("x").callback().is_none());
    }

    #[test]
    fn test_submenu_children_keep_order() {
        let submenu = MenuEntry::submenu("More", [MenuEntry::label("1")])
            .with_child(MenuEntry::spacer())
            .with_child(MenuEntry::label("2"));

        let kinds: Vec<_> = submenu.children().iter().map(MenuEntry::kind).collect();
        assert_eq!(kinds, vec![EntryKind::Label, EntryKind::Spacer, EntryKind::Label]);
    }

    #[test]
    fn test_with_child_ignored_on_leaf() {
        let label = MenuEntry::label("leaf").with_child(MenuEntry::spacer());
        assert!(label.children().is_empty());
        assert_eq!(label.text(), Some("leaf"));
    }

    #[test]
    fn test_debug_hides_callback() {
        let button = MenuEntry::button("Quit", Update::empty);
        assert_eq!(format!("{:?}", button), "Button { label: \"Quit\", .. }");
    }
}
