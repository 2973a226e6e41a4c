// SPDX-License-Identifier: MIT OR Apache-2.0

use vello::kurbo::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::update::Update;

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The cursor moved to `position`.
    Moved {
        /// New cursor position.
        position: Point,
    },
    /// A mouse button changed state at `position`.
    Button {
        /// Cursor position at the time of the change.
        position: Point,
        /// The button.
        button: MouseButton,
        /// Pressed or released.
        state: ElementState,
    },
    /// The cursor left the window.
    Left,
}

impl PointerEvent {
    /// A cursor move to `(x, y)`.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::Moved {
            position: Point::new(x, y),
        }
    }

    /// A press of `button` at `(x, y)`.
    pub fn pressed(button: MouseButton, x: f64, y: f64) -> Self {
        Self::Button {
            position: Point::new(x, y),
            button,
            state: ElementState::Pressed,
        }
    }

    /// A release of `button` at `(x, y)`.
    pub fn released(button: MouseButton, x: f64, y: f64) -> Self {
        Self::Button {
            position: Point::new(x, y),
            button,
            state: ElementState::Released,
        }
    }

    /// Where the event happened. [None] for [PointerEvent::Left].
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Moved { position } | Self::Button { position, .. } => Some(*position),
            Self::Left => None,
        }
    }

    /// Whether this event asks for a context menu (right-button press).
    pub fn is_context_request(&self) -> bool {
        matches!(
            self,
            Self::Button {
                button: MouseButton::Right,
                state: ElementState::Pressed,
                ..
            }
        )
    }

    /// Whether this event is a primary click (left-button press).
    pub fn is_primary_click(&self) -> bool {
        matches!(
            self,
            Self::Button {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            }
        )
    }
}

/// The result of dispatching one pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Work requested from the host.
    pub update: Update,
    /// The host should not show its native context menu.
    pub prevent_default: bool,
}

impl Response {
    /// A response requesting nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A response requesting `update`.
    pub fn with_update(update: Update) -> Self {
        Self {
            update,
            prevent_default: false,
        }
    }

    /// Fold `other` into this response.
    pub fn merge(&mut self, other: Response) {
        self.update |= other.update;
        self.prevent_default |= other.prevent_default;
    }
}

/// Turns winit window events into [PointerEvent]s.
///
/// Winit reports button changes without coordinates, so the tracker keeps
/// the last known cursor position.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
}

impl PointerTracker {
    /// Create a tracker with no known cursor position.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last known cursor position.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Translate a window event. Returns [None] for events that are not
    /// pointer related, and for button changes before the cursor was seen.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::CursorLeft { .. } => Some(self.cursor_left()),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*button, *state),
            _ => None,
        }
    }

    /// Record a cursor move.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        let position = Point::new(position.x, position.y);
        self.cursor = Some(position);
        PointerEvent::Moved { position }
    }

    /// Record the cursor leaving the window.
    pub fn cursor_left(&mut self) -> PointerEvent {
        self.cursor = None;
        PointerEvent::Left
    }

    /// Attach the last cursor position to a button change.
    pub fn mouse_input(&self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        self.cursor.map(|position| PointerEvent::Button {
            position,
            button,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(PointerEvent::pressed(MouseButton::Right, 1.0, 1.0).is_context_request());
        assert!(!PointerEvent::released(MouseButton::Right, 1.0, 1.0).is_context_request());
        assert!(PointerEvent::pressed(MouseButton::Left, 1.0, 1.0).is_primary_click());
        assert!(!PointerEvent::pressed(MouseButton::Middle, 1.0, 1.0).is_primary_click());
        assert!(!PointerEvent::moved(1.0, 1.0).is_primary_click());
        assert_eq!(PointerEvent::Left.position(), None);
    }

    #[test]
    fn test_response_merge() {
        let mut response = Response::with_update(Update::DRAW);
        response.merge(Response {
            update: Update::LAYOUT,
            prevent_default: true,
        });

        assert_eq!(response.update, Update::DRAW | Update::LAYOUT);
        assert!(response.prevent_default);
        assert_eq!(Response::none().update, Update::empty());
    }

    #[test]
    fn test_tracker_attaches_cursor_to_buttons() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.mouse_input(MouseButton::Right, ElementState::Pressed), None);

        let moved = tracker.cursor_moved(PhysicalPosition::new(40.0, 50.0));
        assert_eq!(moved, PointerEvent::moved(40.0, 50.0));

        let event = tracker
            .mouse_input(MouseButton::Right, ElementState::Pressed)
            .unwrap();
        assert!(event.is_context_request());
        assert_eq!(event.position(), Some(Point::new(40.0, 50.0)));
    }

    #[test]
    fn test_tracker_forgets_cursor_on_leave() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(PhysicalPosition::new(1.0, 2.0));

        assert_eq!(tracker.cursor_left(), PointerEvent::Left);
        assert_eq!(tracker.cursor(), None);
        assert_eq!(tracker.translate(&WindowEvent::Focused(true)), None);
    }
}
