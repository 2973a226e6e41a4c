// SPDX-License-Identifier: MIT OR Apache-2.0

use indexmap::IndexMap;
use vello::kurbo::Rect;

use crate::event::PointerEvent;
use crate::layer::{BoxedLayer, Layer, LayerId};
use crate::menu::ContextRequest;
use crate::update::Update;
use crate::vgi::Graphics;

/// Layers in z-order, bottom first.
#[derive(Default)]
pub struct LayerStack {
    layers: IndexMap<LayerId, BoxedLayer>,
}

impl LayerStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a layer on top.
    ///
    /// A layer with the same id is replaced in place and returned.
    pub fn push(&mut self, layer: impl Layer + 'static) -> Option<BoxedLayer> {
        self.push_boxed(Box::new(layer))
    }

    /// Push an already boxed layer. See [push](LayerStack::push).
    pub fn push_boxed(&mut self, layer: BoxedLayer) -> Option<BoxedLayer> {
        let id = layer.id();
        let replaced = self.layers.insert(id.clone(), layer);
        if replaced.is_some() {
            log::debug!("Replaced layer {}", id);
        }
        replaced
    }

    /// Builder form of [push](LayerStack::push).
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.push(layer);
        self
    }

    /// Remove a layer, keeping the order of the others.
    pub fn remove(&mut self, id: &LayerId) -> Option<BoxedLayer> {
        self.layers.shift_remove(id)
    }

    /// Move a layer to the top. Returns whether the layer exists.
    pub fn raise_to_top(&mut self, id: &LayerId) -> bool {
        let Some(index) = self.layers.get_index_of(id) else {
            return false;
        };

        let top = self.layers.len() - 1;
        self.layers.move_index(index, top);
        true
    }

    /// Whether a layer with this id exists.
    pub fn contains(&self, id: &LayerId) -> bool {
        self.layers.contains_key(id)
    }

    /// Mutable access to a layer.
    pub fn get_mut(&mut self, id: &LayerId) -> Option<&mut BoxedLayer> {
        self.layers.get_mut(id)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer ids, bottom first.
    pub fn ids(&self) -> impl Iterator<Item = &LayerId> + '_ {
        self.layers.keys()
    }

    /// Let every layer under the click contribute menu entries, bottom first.
    ///
    /// Entries a layer adds through [Context](crate::menu::Context) are
    /// taken in right after its turn, so they keep their place in the menu.
    ///
    /// Returns how many layers were asked.
    pub fn collect_contributions(&mut self, request: &mut ContextRequest<'_>) -> usize {
        let viewport = request.viewport();
        let position = request.position();
        let mut asked = 0;

        for layer in self.layers.values_mut() {
            if layer.bounds(viewport).contains(position) {
                layer.on_context_menu(request);
                request.absorb_context_entries();
                asked += 1;
            }
        }

        asked
    }

    /// Route a pointer event, top first.
    ///
    /// Button events only reach layers whose bounds contain the cursor. Moves
    /// and leaves reach every layer so they can drop their hover state.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent, viewport: Rect) -> Update {
        let mut update = Update::empty();

        for layer in self.layers.values_mut().rev() {
            let targeted = match event {
                PointerEvent::Button { position, .. } => layer.bounds(viewport).contains(*position),
                PointerEvent::Moved { .. } | PointerEvent::Left => true,
            };

            if targeted {
                update |= layer.on_pointer(event, viewport);
            }
        }

        update
    }

    /// Draw every layer, bottom first.
    pub fn render(&mut self, graphics: &mut dyn Graphics, viewport: Rect) {
        for layer in self.layers.values_mut() {
            layer.render(graphics, viewport);
        }
    }
}
