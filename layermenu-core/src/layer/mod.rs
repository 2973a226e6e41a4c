// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Layers
//!
//! A window is composed of stacked [Layer]s. The [LayerStack] keeps them in
//! z-order, bottom first, and routes events to the layers under the cursor.
//!
//! - **[LayerStack]**: the ordered collection
//! - **[LayerGroup]**: a stack that is itself a layer
//! - **[MenuRegion]**: a closure-backed layer for application code

use std::fmt;

use vello::kurbo::Rect;

use crate::event::PointerEvent;
use crate::menu::ContextRequest;
use crate::update::Update;
use crate::vgi::Graphics;

mod group;
mod region;
mod stack;

pub use group::LayerGroup;
pub use region::MenuRegion;
pub use stack::LayerStack;

/// Identifier of a layer, unique within its stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(String);

impl LayerId {
    /// Create an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One layer of a window.
pub trait Layer {
    /// The identifier of this layer.
    fn id(&self) -> LayerId;

    /// The area this layer receives events in. Defaults to the whole viewport.
    fn bounds(&self, viewport: Rect) -> Rect {
        viewport
    }

    /// Contribute entries to the context menu being built for a right-click
    /// inside [bounds](Layer::bounds).
    fn on_context_menu(&mut self, _request: &mut ContextRequest<'_>) {}

    /// Handle a pointer event.
    fn on_pointer(&mut self, _event: &PointerEvent, _viewport: Rect) -> Update {
        Update::empty()
    }

    /// Draw the layer.
    fn render(&mut self, _graphics: &mut dyn Graphics, _viewport: Rect) {}
}

/// A boxed [Layer].
pub type BoxedLayer = Box<dyn Layer>;
