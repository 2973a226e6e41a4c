// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::Rect;

use crate::event::PointerEvent;
use crate::layer::{Layer, LayerId, LayerStack};
use crate::menu::ContextRequest;
use crate::update::Update;
use crate::vgi::Graphics;

/// A nested [LayerStack] that is itself a layer.
///
/// Every call is forwarded to the children in stack order. The group does not
/// build menus of its own.
pub struct LayerGroup {
    id: LayerId,
    stack: LayerStack,
}

impl LayerGroup {
    /// Create an empty group.
    pub fn new(id: impl Into<LayerId>) -> Self {
        Self {
            id: id.into(),
            stack: LayerStack::new(),
        }
    }

    /// Add a child layer on top.
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.stack.push(layer);
        self
    }

    /// The children of this group.
    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// Mutable access to the children of this group.
    pub fn stack_mut(&mut self) -> &mut LayerStack {
        &mut self.stack
    }
}

impl Layer for LayerGroup {
    fn id(&self) -> LayerId {
        self.id.clone()
    }

    fn on_context_menu(&mut self, request: &mut ContextRequest<'_>) {
        self.stack.collect_contributions(request);
    }

    fn on_pointer(&mut self, event: &PointerEvent, viewport: Rect) -> Update {
        self.stack.dispatch_pointer(event, viewport)
    }

    fn render(&mut self, graphics: &mut dyn Graphics, viewport: Rect) {
        self.stack.render(graphics, viewport);
    }
}
