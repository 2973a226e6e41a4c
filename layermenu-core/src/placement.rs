// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Placement
//!
//! A menu panel is shown at its anchor unless it would cross the right or
//! bottom edge of the viewport, in which case it flips to the other side of
//! the anchor. Placement runs in two passes: the panel is first laid out while
//! hidden ([Placement::Measuring]) and becomes visible once its origin is
//! committed ([Placement::Placed]).
//!
//! Submenus flip around the row that opened them:
//!
//! - horizontally, the panel moves left by its own width plus the row width,
//!   so it opens on the left side of the parent menu;
//! - vertically, the panel moves up by its height minus the row height, so
//!   its bottom lines up with the bottom of the row.
//!
//! Positions are never clamped. A panel larger than the viewport overflows the
//! opposite edge.

use vello::kurbo::{Point, Rect, Size, Vec2};

/// Everything needed to place one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Preferred origin, relative to the reference element.
    pub anchor: Point,
    /// Measured size of the panel.
    pub size: Size,
    /// Absolute origin of the reference element. [Point::ZERO] for root menus.
    pub reference_origin: Point,
    /// Size of the row that opened the panel, for submenus.
    pub trigger: Option<Size>,
}

impl PlacementRequest {
    /// A request for a root menu anchored at an absolute position.
    pub fn root(anchor: Point, size: Size) -> Self {
        Self {
            anchor,
            size,
            reference_origin: Point::ZERO,
            trigger: None,
        }
    }

    /// A request for a submenu anchored inside its parent panel.
    pub fn nested(anchor: Point, size: Size, reference_origin: Point, trigger: Size) -> Self {
        Self {
            anchor,
            size,
            reference_origin,
            trigger: Some(trigger),
        }
    }
}

/// Compute the origin of a panel, relative to its reference element.
pub fn place(request: &PlacementRequest, viewport: Size) -> Point {
    let trigger = request.trigger.unwrap_or(Size::ZERO);
    let absolute = request.reference_origin + request.anchor.to_vec2();
    let mut origin = request.anchor;

    if absolute.x + request.size.width > viewport.width {
        origin.x -= request.size.width + trigger.width;
        log::trace!(
            "Flipping menu left: {} + {} exceeds viewport width {}",
            absolute.x,
            request.size.width,
            viewport.width
        );
    }

    if absolute.y + request.size.height > viewport.height {
        origin.y -= request.size.height - trigger.height;
        log::trace!(
            "Flipping menu up: {} + {} exceeds viewport height {}",
            absolute.y,
            request.size.height,
            viewport.height
        );
    }

    origin
}

/// Placement state of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Laid out but hidden. The origin is not known yet.
    Measuring {
        /// Preferred origin, relative to the reference element.
        anchor: Point,
    },
    /// Visible at a committed origin.
    Placed {
        /// Preferred origin the placement was computed from.
        anchor: Point,
        /// Committed origin, relative to the reference element.
        origin: Point,
        /// Committed origin in viewport coordinates.
        absolute: Point,
        /// Size the placement was computed with.
        size: Size,
    },
}

impl Placement {
    /// A panel waiting to be measured.
    pub fn new(anchor: Point) -> Self {
        Self::Measuring { anchor }
    }

    /// The preferred origin.
    pub fn anchor(&self) -> Point {
        match self {
            Self::Measuring { anchor } | Self::Placed { anchor, .. } => *anchor,
        }
    }

    /// Commit a placement for a measured panel.
    ///
    /// Returns `false` and keeps the existing placement if the panel is
    /// already placed.
    pub fn commit(&mut self, request: &PlacementRequest, viewport: Size) -> bool {
        if self.is_placed() {
            return false;
        }

        let origin = place(request, viewport);
        *self = Self::Placed {
            anchor: request.anchor,
            origin,
            absolute: request.reference_origin + origin.to_vec2(),
            size: request.size,
        };
        true
    }

    /// Go back to measuring, keeping the anchor.
    pub fn reset(&mut self) {
        *self = Self::new(self.anchor());
    }

    /// Whether the panel has a committed origin and is visible.
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    /// The committed origin in viewport coordinates.
    pub fn absolute(&self) -> Option<Point> {
        match self {
            Self::Placed { absolute, .. } => Some(*absolute),
            Self::Measuring { .. } => None,
        }
    }

    /// The committed panel rectangle in viewport coordinates.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Placed { absolute, size, .. } => Some(Rect::from_origin_size(*absolute, *size)),
            Self::Measuring { .. } => None,
        }
    }

    /// Offset from the committed origin to `point`, if placed.
    pub fn local(&self, point: Point) -> Option<Vec2> {
        self.absolute().map(|origin| point - origin)
    }
}
