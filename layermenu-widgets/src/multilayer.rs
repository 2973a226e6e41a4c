// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Layers with a Context Menu
//!
//! [MultilayerWithContext] is the composition root of a window: it owns the
//! application [LayerStack], the [MenuBuilder] and the open menu.
//!
//! ## Right-click protocol
//!
//! 1. **Open**: the capture layer begins a session at the cursor.
//! 2. **Collect**: every application layer under the cursor contributes
//!    entries, bottom of the stack first.
//! 3. **Materialize**: the notifier finalizes the session and the menu opens,
//!    replacing any open one. The host is told to suppress its native menu.
//!
//! Layers may contribute through the [ContextRequest] they are handed or
//! through [Context](layermenu_core::menu::Context).
//!
//! While a menu is open, pointer events over it never reach the application
//! layers.
//!
//! ## Example
//!
//! ```rust
//! use layermenu_core::config::MenuConfig;
//! use layermenu_core::event::PointerEvent;
//! use layermenu_core::layer::MenuRegion;
//! use layermenu_core::menu::MenuEntry;
//! use layermenu_core::text::CharWidthMeasure;
//! use layermenu_core::update::Update;
//! use layermenu_core::window::MouseButton;
//! use layermenu_widgets::multilayer::MultilayerWithContext;
//!
//! let mut root = MultilayerWithContext::new("window", MenuConfig::default()).with_layer(
//!     MenuRegion::new("canvas").on_context_menu(|request| {
//!         request.add_entry(MenuEntry::button("Clear", || Update::DRAW));
//!     }),
//! );
//!
//! let mut text = CharWidthMeasure::default();
//! let response = root.handle_pointer(&PointerEvent::pressed(MouseButton::Right, 20.0, 20.0), &mut text);
//! assert!(response.prevent_default);
//! assert!(root.is_menu_visible());
//! ```

use layermenu_core::config::MenuConfig;
use layermenu_core::event::{PointerEvent, Response};
use layermenu_core::layer::{Layer, LayerId, LayerStack};
use layermenu_core::menu::{ContextRequest, MenuBuilder, MenuNode};
use layermenu_core::text::{TextMeasure, TextRenderer};
use layermenu_core::update::Update;
use layermenu_core::vg::kurbo::{Point, Rect, Size};
use layermenu_core::vgi::Graphics;

use crate::layers::{CaptureLayer, DrawLayer, Notification, NotifierLayer};
use crate::menu_view::{ClickOutcome, MenuView};

/// Whether a menu is shown.
pub enum MenuVisibility {
    /// No menu.
    Closed,
    /// A menu is shown by this layer.
    Open(DrawLayer),
}

/// A layer stack that builds context menus from its layers.
pub struct MultilayerWithContext {
    id: LayerId,
    config: MenuConfig,
    builder: MenuBuilder,
    capture: CaptureLayer,
    notifier: NotifierLayer,
    layers: LayerStack,
    menu: MenuVisibility,
    pointer_over_menu: bool,
}

impl MultilayerWithContext {
    /// Create an empty composition.
    pub fn new(id: impl Into<LayerId>, config: MenuConfig) -> Self {
        let id = id.into();
        Self {
            capture: CaptureLayer::new(&id),
            notifier: NotifierLayer::new(&id),
            id,
            config,
            builder: MenuBuilder::new(),
            layers: LayerStack::new(),
            menu: MenuVisibility::Closed,
            pointer_over_menu: false,
        }
    }

    /// Add an application layer on top of the existing ones.
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.layers.push(layer);
        self
    }

    /// The identifier of this composition.
    pub fn id(&self) -> &LayerId {
        &self.id
    }

    /// The configuration in use.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The application layers.
    pub fn layers_mut(&mut self) -> &mut LayerStack {
        &mut self.layers
    }

    /// Whether a menu is shown.
    pub fn is_menu_visible(&self) -> bool {
        matches!(self.menu, MenuVisibility::Open(_))
    }

    /// The open menu.
    pub fn root(&self) -> Option<&MenuNode> {
        match &self.menu {
            MenuVisibility::Open(layer) => Some(layer.root()),
            MenuVisibility::Closed => None,
        }
    }

    /// The view of the open menu.
    pub fn menu_view(&self) -> Option<&MenuView> {
        match &self.menu {
            MenuVisibility::Open(layer) => Some(layer.view()),
            MenuVisibility::Closed => None,
        }
    }

    /// Close the open menu. Returns whether a menu was open.
    pub fn close_context_menu(&mut self) -> bool {
        match std::mem::replace(&mut self.menu, MenuVisibility::Closed) {
            MenuVisibility::Open(layer) => {
                log::debug!("{}: closing context menu with {} entries", self.id, layer.root().len());
                true
            },
            MenuVisibility::Closed => false,
        }
    }

    /// The size menus are placed in.
    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    /// Change the viewport size. An open menu is placed again on the next
    /// [layout](MultilayerWithContext::layout).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
        if let MenuVisibility::Open(layer) = &mut self.menu {
            layer.reset_placement();
        }
    }

    fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.config.viewport)
    }

    fn menu_contains(&self, position: Point) -> bool {
        matches!(&self.menu, MenuVisibility::Open(layer) if layer.contains(position))
    }

    /// Lay out the open menu.
    pub fn layout(&mut self, text: &mut dyn TextMeasure) {
        if let MenuVisibility::Open(layer) = &mut self.menu {
            layer.layout(text, &self.config.styles, self.config.viewport);
        }
    }

    /// Draw the application layers, then the open menu on top.
    pub fn render(&mut self, graphics: &mut dyn Graphics, text: &mut dyn TextRenderer) {
        let viewport = self.viewport_rect();
        self.layers.render(graphics, viewport);

        if let MenuVisibility::Open(layer) = &self.menu {
            layer.render(graphics, text);
        }
    }

    /// Dispatch one pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent, text: &mut dyn TextMeasure) -> Response {
        let viewport = self.viewport_rect();

        match *event {
            PointerEvent::Button { position, .. } if event.is_context_request() => {
                self.open_at(position, text)
            },
            PointerEvent::Button { position, .. } if event.is_primary_click() => {
                Response::with_update(self.primary_click(event, position, viewport))
            },
            PointerEvent::Moved { position } => {
                let mut update = Update::empty();
                if let MenuVisibility::Open(layer) = &mut self.menu {
                    update |= layer.pointer_moved(position);
                    if update.contains(Update::LAYOUT) {
                        layer.layout(text, &self.config.styles, self.config.viewport);
                    }
                }

                // The layers below see the pointer leave once when it enters
                // the menu, and nothing more until it comes back out.
                let over_menu = self.menu_contains(position);
                if !over_menu {
                    update |= self.layers.dispatch_pointer(event, viewport);
                } else if !self.pointer_over_menu {
                    update |= self.layers.dispatch_pointer(&PointerEvent::Left, viewport);
                }
                self.pointer_over_menu = over_menu;

                Response::with_update(update)
            },
            PointerEvent::Left => {
                let mut update = Update::empty();
                if let MenuVisibility::Open(layer) = &mut self.menu {
                    update |= layer.pointer_left();
                }

                self.pointer_over_menu = false;
                update |= self.layers.dispatch_pointer(event, viewport);
                Response::with_update(update)
            },
            PointerEvent::Button { position, .. } => {
                if self.menu_contains(position) {
                    return Response::none();
                }
                Response::with_update(self.layers.dispatch_pointer(event, viewport))
            },
        }
    }

    fn open_at(&mut self, position: Point, text: &mut dyn TextMeasure) -> Response {
        let viewport = self.viewport_rect();
        self.capture.on_context_menu(&mut self.builder, position);

        // The menu panel is not part of any application layer.
        if !self.menu_contains(position) {
            let mut request = ContextRequest::new(position, viewport, &mut self.builder);
            let asked = self.layers.collect_contributions(&mut request);
            log::trace!("{}: {} layers asked for entries", self.id, asked);
        }

        match self.notifier.on_context_menu(&mut self.builder, self.config.suppress_empty) {
            Notification::Open(node) => {
                log::debug!(
                    "{}: opening context menu with {} entries at ({}, {})",
                    self.id,
                    node.len(),
                    position.x,
                    position.y
                );
                let mut layer = DrawLayer::new(node);
                layer.layout(text, &self.config.styles, self.config.viewport);
                self.menu = MenuVisibility::Open(layer);
            },
            Notification::Suppressed => {
                self.close_context_menu();
            },
            Notification::Idle => {},
        }

        Response {
            update: Update::LAYOUT | Update::DRAW,
            prevent_default: true,
        }
    }

    fn primary_click(&mut self, event: &PointerEvent, position: Point, viewport: Rect) -> Update {
        let outcome = match &self.menu {
            MenuVisibility::Open(layer) => layer.click(position),
            MenuVisibility::Closed => ClickOutcome::Outside,
        };

        let mut update = Update::empty();
        if let ClickOutcome::Activated(callback) = &outcome {
            update |= callback();
        }

        if self.capture.on_primary_click(&mut self.menu).is_some() {
            update |= Update::DRAW;
        }

        if matches!(outcome, ClickOutcome::Outside) {
            update |= self.layers.dispatch_pointer(event, viewport);
        }

        update
    }
}
