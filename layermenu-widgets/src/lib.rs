// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Context menu layers for layermenu => See `layermenu` crate.
//!
//! [MultilayerWithContext](multilayer::MultilayerWithContext) wraps an
//! application [LayerStack](layermenu_core::layer::LayerStack) and turns
//! right-clicks into menus built from the entries its layers contribute.

/// Contains the [HoverBox](hover_box::HoverBox) style switcher.
pub mod hover_box;

/// Contains the capture, notifier and draw layers.
pub mod layers;

/// Contains the [MenuView](menu_view::MenuView) panel renderer.
pub mod menu_view;

/// Contains the [MultilayerWithContext](multilayer::MultilayerWithContext) composition root.
pub mod multilayer;
