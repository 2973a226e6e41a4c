#![warn(missing_docs)]

//! Nested, viewport-aware context menus for layered UIs.
//!
//! Application layers contribute entries while a right-click is dispatched,
//! the entries become an immutable menu and the menu is drawn on top of the
//! layers, flipping away from the viewport edges.

pub use vello::peniko as color;

pub use layermenu_core as core;
pub use layermenu_theme as theme;
pub use layermenu_widgets as widgets;

/// A "prelude" for users of layermenu.
///
/// Importing this module brings into scope the most common types
/// needed to add context menus to a layer stack.
///
/// ```rust
/// use layermenu::prelude::*;
///
/// let root = MultilayerWithContext::new("window", MenuConfig::default())
///     .with_layer(MenuRegion::new("canvas").on_context_menu(|request| {
///         request.add_entry(MenuEntry::label("Canvas"));
///     }));
/// assert!(!root.is_menu_visible());
/// ```
pub mod prelude {
    pub use crate::core::config::MenuConfig;
    pub use crate::core::event::{PointerEvent, PointerTracker, Response};
    pub use crate::core::layer::{Layer, LayerGroup, LayerId, LayerStack, MenuRegion};
    pub use crate::core::menu::{Context, ContextRequest, EntryKind, MenuBuilder, MenuEntry, MenuNode};
    pub use crate::core::text::{CharWidthMeasure, TextMeasure, TextRenderer};
    pub use crate::core::update::Update;
    pub use crate::core::vgi::Graphics;
    pub use crate::core::window::{ElementState, MouseButton};

    pub use crate::theme::menu::MenuStyles;
    pub use crate::theme::style::{BoxStyle, Edges, Shadow};

    pub use crate::widgets::menu_view::MenuView;
    pub use crate::widgets::multilayer::MultilayerWithContext;
}
