// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::Rect;

use crate::event::PointerEvent;
use crate::layer::{Layer, LayerId};
use crate::menu::ContextRequest;
use crate::update::Update;

type ContributeFn = Box<dyn FnMut(&mut ContextRequest<'_>)>;
type PointerFn = Box<dyn FnMut(&PointerEvent) -> Update>;

/// A layer whose behaviour is given by closures.
///
/// ```rust
/// use layermenu_core::layer::MenuRegion;
/// use layermenu_core::menu::MenuEntry;
/// use layermenu_core::vg::kurbo::Rect;
///
/// let region = MenuRegion::new("canvas")
///     .with_bounds(Rect::new(0.0, 0.0, 400.0, 300.0))
///     .on_context_menu(|request| request.add_entry(MenuEntry::label("Canvas")));
/// ```
pub struct MenuRegion {
    id: LayerId,
    bounds: Option<Rect>,
    contribute: Option<ContributeFn>,
    pointer: Option<PointerFn>,
}

impl MenuRegion {
    /// Create a region covering the whole viewport that does nothing.
    pub fn new(id: impl Into<LayerId>) -> Self {
        Self {
            id: id.into(),
            bounds: None,
            contribute: None,
            pointer: None,
        }
    }

    /// Restrict the region to a fixed rectangle.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Run `contribute` for every right-click inside the region.
    pub fn on_context_menu<F>(mut self, contribute: F) -> Self
    where
        F: FnMut(&mut ContextRequest<'_>) + 'static,
    {
        self.contribute = Some(Box::new(contribute));
        self
    }

    /// Run `handler` for pointer events routed to the region.
    pub fn on_pointer<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&PointerEvent) -> Update + 'static,
    {
        self.pointer = Some(Box::new(handler));
        self
    }
}

impl Layer for MenuRegion {
    fn id(&self) -> LayerId {
        self.id.clone()
    }

    fn bounds(&self, viewport: Rect) -> Rect {
        match self.bounds {
            Some(bounds) => bounds.intersect(viewport),
            None => viewport,
        }
    }

    fn on_context_menu(&mut self, request: &mut ContextRequest<'_>) {
        if let Some(contribute) = &mut self.contribute {
            contribute(request);
        }
    }

    fn on_pointer(&mut self, event: &PointerEvent, _viewport: Rect) -> Update {
        match &mut self.pointer {
            Some(handler) => handler(event),
            None => Update::empty(),
        }
    }
}
