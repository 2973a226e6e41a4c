// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors raised by the menu builder.

use thiserror::Error;
use vello::kurbo::Point;

/// Errors that can occur while driving a menu session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// A session was started while another one was still collecting entries.
    #[error("a context menu session is already open at ({}, {})", .anchor.x, .anchor.y)]
    SessionInFlight {
        /// Anchor of the session that is still open.
        anchor: Point,
    },
}
