// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Menu Model
//!
//! A context menu is described by a flat list of [MenuEntry] values collected
//! while a right-click is dispatched through the layer stack:
//!
//! 1. The capture layer calls [MenuBuilder::begin] with the cursor position.
//! 2. Every layer under the cursor appends entries through a [ContextRequest].
//! 3. The notifier layer calls [MenuBuilder::finalize], producing an
//!    immutable [MenuNode] the menu view renders.
//!
//! ```rust
//! use layermenu_core::menu::{MenuBuilder, MenuEntry};
//! use layermenu_core::vg::kurbo::Point;
//!
//! let mut builder = MenuBuilder::new();
//! builder.begin(Point::new(10.0, 20.0));
//! builder.add_entry(MenuEntry::label("Canvas"));
//! builder.add_entry(MenuEntry::spacer());
//!
//! let node = builder.finalize().unwrap();
//! assert_eq!(node.len(), 2);
//! assert!(!builder.is_open());
//! ```

mod builder;
mod context;
mod entry;
mod node;

pub use builder::{ContextRequest, MenuBuilder};
pub use context::Context;
pub use entry::{Callback, EntryKind, MenuEntry};
pub use node::MenuNode;
