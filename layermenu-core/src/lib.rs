// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core library for layermenu => See `layermenu` crate.
//!
//! Contains the menu entry model, the per-event menu builder, the placement
//! engine and the layer stack the context menu is composed on.

pub use vello as vg;

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::dpi::PhysicalPosition;
    pub use winit::event::{ElementState, MouseButton, WindowEvent};
}

/// Contains the [MenuConfig](config::MenuConfig) struct.
pub mod config;

/// Contains the [MenuError](error::MenuError) type.
pub mod error;

/// Contains pointer events and dispatch results.
pub mod event;

/// Contains the [Layer](layer::Layer) trait and the ordered layer stack.
pub mod layer;

/// Contains the menu entry model and the per-event menu builder.
pub mod menu;

/// Contains the viewport-aware placement engine.
pub mod placement;

/// Contains the text measurement and rendering seams.
pub mod text;

/// Contains the [Update](update::Update) bitflag.
pub mod update;

/// Contains the vector graphics interface abstraction.
pub mod vgi;
